use std::path::Path;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;
use epochcurve_api::prelude::*;

/// One step of a replayed trade log. `elapsed` advances the clock (seconds)
/// before the step runs.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum TradeCommand {
    Buy {
        #[serde(with = "decimal")]
        amount: U256,
        #[serde(default)]
        elapsed: u64,
        #[serde(default)]
        raw: bool,
    },
    Sell {
        #[serde(with = "decimal")]
        amount: U256,
        #[serde(default)]
        elapsed: u64,
        #[serde(default)]
        raw: bool,
    },
    Mint {
        #[serde(default)]
        elapsed: u64,
    },
    Info {
        #[serde(default)]
        elapsed: u64,
    },
}

impl TradeCommand {
    fn elapsed(&self) -> u64 {
        match self {
            TradeCommand::Buy { elapsed, .. }
            | TradeCommand::Sell { elapsed, .. }
            | TradeCommand::Mint { elapsed }
            | TradeCommand::Info { elapsed } => *elapsed,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct TradeLog {
    pub commands: Vec<TradeCommand>,
}

impl TradeLog {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading trade log {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing trade log {}", path.display()))
    }
}

/// Forwards each released epoch to the log and keeps a running total.
#[derive(Default)]
pub struct LoggingHolders {
    pub epochs: usize,
    pub total: U256,
}

impl MintListener for LoggingHolders {
    fn mint_supply_for_holders(&mut self, amount: U256) -> CurveResult<()> {
        self.epochs += 1;
        self.total = add(self.total, amount)?;
        tracing::info!(epoch = self.epochs, amount = %format_amount(amount), "minted supply for holders");
        Ok(())
    }
}

fn print_position(engine: &CurveEngine, now: u64) -> Result<()> {
    let (row, col) = engine.cursor().position();
    let interval = engine.current_interval()?;
    println!(
        "  t={:<8} segment ({}, {})  reserve {}  supply {}  segment reserve [{}, {}]",
        now,
        row,
        col,
        format_amount(engine.ledger().reserve_total()),
        format_amount(engine.ledger().supply_total()),
        format_amount(interval.min_r),
        format_amount(interval.max_r),
    );
    for id in 0..engine.table().rows() {
        if let Some(start) = engine.timers().started_at(id) {
            let status = if engine.timers().running(id, now) {
                "running".yellow()
            } else {
                "expired".dimmed()
            };
            println!("    timer {} started at {} ({})", id, start, status);
        }
    }
    Ok(())
}

/// Replays `log` against a fresh engine. Failed trades are reported and
/// rolled back; the replay carries on.
pub fn replay(config: &CurveConfig, log: &TradeLog) -> Result<()> {
    let mut engine = config.build_engine()?;
    let mut scheduler = MintScheduler::new(engine.table().clone(), LoggingHolders::default());
    let mut now = 0u64;
    let mut failures = 0usize;

    for (step, command) in log.commands.iter().enumerate() {
        now = now.checked_add(command.elapsed()).context("clock overflow")?;

        let outcome = match command {
            TradeCommand::Buy { amount, raw, .. } => {
                let result = if *raw { engine.buy_curve(*amount, now) } else { engine.buy(*amount, now) };
                result.map(|out| {
                    format!("buy {} reserve -> {} supply", format_amount(*amount), format_amount(out))
                })
            }
            TradeCommand::Sell { amount, raw, .. } => {
                let result = if *raw { engine.sell_curve(*amount, now) } else { engine.sell(*amount, now) };
                result.map(|out| {
                    format!("sell {} supply -> {} reserve", format_amount(*amount), format_amount(out))
                })
            }
            TradeCommand::Mint { .. } => scheduler
                .update_minting_state(engine.timers(), now)
                .map(|minted| match minted {
                    Some(amount) => format!("mint {} for epoch {}", format_amount(amount), scheduler.index()),
                    None => "mint: nothing due".to_string(),
                }),
            TradeCommand::Info { .. } => Ok("info".to_string()),
        };

        match outcome {
            Ok(message) => println!("{:>4} {}", step, message.green()),
            Err(err) => {
                failures += 1;
                println!("{:>4} {}", step, format!("{:?} failed: {}", command, err).red());
            }
        }
        print_position(&engine, now)?;
    }

    let holders = scheduler.listener();
    println!(
        "\n{} steps, {} failed, {} epochs minted ({} supply)",
        log.commands.len(),
        failures,
        holders.epochs,
        format_amount(holders.total)
    );
    Ok(())
}

#[derive(Default)]
struct StressSummary {
    buys: usize,
    sells: usize,
    rejected: usize,
    mints: usize,
    supply_drift: usize,
}

fn check_ledger(engine: &CurveEngine) -> Result<bool> {
    let interval = engine.current_interval()?;
    let ledger = engine.ledger();
    if ledger.reserve_total() < interval.min_r || ledger.reserve_total() > interval.max_r {
        bail!(
            "reserve {} left segment {:?} [{}, {}]",
            ledger.reserve_total(),
            engine.cursor().position(),
            interval.min_r,
            interval.max_r
        );
    }
    Ok(ledger.supply_total() >= interval.min_n && ledger.supply_total() <= interval.max_n)
}

/// Drives random trades through the engine and checks the ledger stays
/// inside the current segment after every step.
pub fn stress(config: &CurveConfig, trades: usize, seed: u64) -> Result<()> {
    let mut engine = config.build_engine()?;
    let mut scheduler = MintScheduler::new(engine.table().clone(), LoggingHolders::default());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = StressSummary::default();
    let mut now = 0u64;

    let max_reserve = engine.table().max_reserve()?;
    let timeout = config.timeout.max(1);

    for step in 0..trades {
        now += rng.gen_range(0..=timeout / 4);

        // Trade sizes range from dust up to a tenth of the curve.
        let scale = rng.gen_range(1..=10_000u64);
        let result = if rng.gen_bool(0.6) || engine.ledger().supply_total().is_zero() {
            let amount = max_reserve / U256::from(100_000u64) * U256::from(scale);
            summary.buys += 1;
            engine.buy(amount, now)
        } else {
            let amount = engine.ledger().supply_total() / U256::from(10_000u64) * U256::from(scale);
            summary.sells += 1;
            engine.sell(amount, now)
        };

        if let Err(err) = result {
            tracing::debug!(step, %err, "trade rejected");
            summary.rejected += 1;
        }

        if !check_ledger(&engine).with_context(|| format!("after step {}", step))? {
            summary.supply_drift += 1;
        }

        if scheduler.update_minting_state(engine.timers(), now)?.is_some() {
            summary.mints += 1;
        }
    }

    println!("{}", "Stress run complete".green());
    println!("  trades        {}", trades);
    println!("  buys / sells  {} / {}", summary.buys, summary.sells);
    println!("  rejected      {}", summary.rejected);
    println!("  epochs minted {} ({} supply)", summary.mints, format_amount(scheduler.listener().total));
    println!("  final reserve {}", format_amount(engine.ledger().reserve_total()));
    println!("  final supply  {}", format_amount(engine.ledger().supply_total()));
    println!("  final segment {:?}", engine.cursor().position());
    if summary.supply_drift > 0 {
        println!(
            "  {} {} steps left supply outside its segment's bounds",
            "warning:".yellow(),
            summary.supply_drift
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trade_log() {
        let log: TradeLog = serde_json::from_str(
            r#"[
                {"op": "buy", "amount": "500_000000000000000000"},
                {"op": "sell", "amount": "1", "elapsed": 60, "raw": true},
                {"op": "mint", "elapsed": 86400},
                {"op": "info"}
            ]"#,
        )
        .unwrap();

        assert_eq!(log.commands.len(), 4);
        match &log.commands[0] {
            TradeCommand::Buy { amount, elapsed, raw } => {
                assert_eq!(*amount, tokens(500));
                assert_eq!(*elapsed, 0);
                assert!(!raw);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(log.commands[1].elapsed(), 60);
        assert_eq!(log.commands[2].elapsed(), 86_400);
    }

    #[test]
    fn test_parse_rejects_unknown_op() {
        let result: Result<TradeLog, _> = serde_json::from_str(r#"[{"op": "burn"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_logging_holders_accumulate() {
        let mut holders = LoggingHolders::default();
        holders.mint_supply_for_holders(tokens(3)).unwrap();
        holders.mint_supply_for_holders(tokens(4)).unwrap();
        assert_eq!(holders.epochs, 2);
        assert_eq!(holders.total, tokens(7));
    }

    #[test]
    fn test_replay_demo_curve() {
        let config = CurveConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../curves/demo.json")).unwrap();
        let log = TradeLog::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../curves/demo-trades.json"))).unwrap();
        replay(&config, &log).unwrap();
    }

    #[test]
    fn test_stress_demo_curve() {
        let config = CurveConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../curves/demo.json")).unwrap();
        stress(&config, 200, 7).unwrap();
    }
}
