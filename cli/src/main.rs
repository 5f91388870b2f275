mod report;
mod simulate;

use std::path::PathBuf;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use epochcurve_api::prelude::*;

#[derive(Parser)]
#[command(name = "epochcurve")]
#[command(about = "Tools for building, checking, and replaying epoch-gated bonding curves")]
struct Cli {
    #[arg(long, short, global = true, help = "Log curve crossings, timers, and mints")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derives the exp/log approximation tables and prints them as Rust source
    Tables {
        #[arg(long, help = "Compare against the embedded tables instead of printing")]
        check: bool,
    },

    /// Measures exp/log error against a high-precision reference
    Accuracy {
        #[arg(long, default_value_t = 10_000, help = "Random inputs per function")]
        samples: usize,

        #[arg(long, default_value_t = 1, help = "RNG seed")]
        seed: u64,
    },

    /// Replays a JSON trade log against a fresh curve
    Simulate {
        #[arg(long, help = "Curve config (JSON)")]
        curve: PathBuf,

        #[arg(long, help = "Trade log (JSON list of buy, sell, mint, and info commands)")]
        trades: PathBuf,
    },

    /// Runs random trades and checks the ledger after each one
    Stress {
        #[arg(long, help = "Curve config (JSON)")]
        curve: PathBuf,

        #[arg(long, default_value_t = 1_000, help = "Number of trades")]
        trades: usize,

        #[arg(long, default_value_t = 1, help = "RNG seed")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Tables { check } => {
            let (exp_tables, log_tables) = build_default_tables()?;

            if !check {
                print!("{}", render_tables(&exp_tables, &log_tables));
                return Ok(());
            }

            let matches = exp_tables.hi == EXP_HI_TERMS
                && exp_tables.lo == EXP_LO_TERMS
                && log_tables.hi == LOG_HI_TERMS
                && log_tables.lo == LOG_LO_TERMS;

            if !matches {
                bail!("embedded tables differ from the builder output; regenerate with `epochcurve tables`");
            }
            println!(
                "{} exp: {} hi / {} lo terms, log: {} hi / {} lo terms",
                "tables match".green(),
                exp_tables.hi.len(),
                exp_tables.lo.len(),
                log_tables.hi.len(),
                log_tables.lo.len()
            );
        }

        Commands::Accuracy { samples, seed } => {
            report::accuracy(samples, seed)?;
        }

        Commands::Simulate { curve, trades } => {
            let config = CurveConfig::load(&curve)?;
            let log = simulate::TradeLog::load(&trades)?;
            simulate::replay(&config, &log)?;
        }

        Commands::Stress { curve, trades, seed } => {
            let config = CurveConfig::load(&curve)?;
            simulate::stress(&config, trades, seed)?;
        }
    }

    Ok(())
}
