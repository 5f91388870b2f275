use anyhow::Result;
use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};
use epochcurve_api::prelude::*;

/// Worst-case error seen over a batch of samples.
#[derive(Default)]
struct ErrorStats {
    samples: usize,
    overestimates: usize,
    worst: f64,
    worst_input: U256,
}

impl ErrorStats {
    fn record(&mut self, input: U256, expected: U256, actual: U256) {
        self.samples += 1;
        if actual > expected {
            self.overestimates += 1;
        }
        let error = relative_error(expected, actual);
        if error > self.worst {
            self.worst = error;
            self.worst_input = input;
        }
    }

    fn print(&self, name: &str) {
        let status = if self.overestimates == 0 {
            "ok".green()
        } else {
            "OVERESTIMATES".red()
        };
        println!(
            "{:<4} {:>8} samples  worst relative error {:.3e} at {}  overestimates {}  {}",
            name,
            self.samples,
            self.worst,
            format_fixed(self.worst_input),
            self.overestimates,
            status
        );
    }
}

/// |expected - actual| / expected, using the top bits of both.
fn relative_error(expected: U256, actual: U256) -> f64 {
    if expected.is_zero() {
        return 0.0;
    }
    let diff = if expected > actual { expected - actual } else { actual - expected };
    let shift = expected.bits().saturating_sub(100);
    let diff = (diff >> shift).min(U256::from(u128::MAX));
    (diff.as_u128() as f64) / ((expected >> shift).as_u128() as f64)
}

fn random_below(rng: &mut StdRng, bound: U256) -> U256 {
    U256([rng.gen(), rng.gen(), rng.gen(), rng.gen()]) % bound
}

pub fn accuracy(samples: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut exp_stats = ErrorStats::default();
    let bound = exp_domain_bound();
    for _ in 0..samples {
        let x = random_below(&mut rng, bound);
        exp_stats.record(x, reference_exp(x)?, exp(x)?);
    }

    // log is checked through its inverse: e^log(x) should land at or below x.
    let mut log_stats = ErrorStats::default();
    let span = log_domain_bound() - FIXED_ONE;
    for _ in 0..samples {
        let x = FIXED_ONE + random_below(&mut rng, span);
        log_stats.record(x, x, reference_exp(log(x)?)?);
    }

    println!("Accuracy against the builder reference (seed {}):", seed);
    exp_stats.print("exp");
    log_stats.print("log");

    if exp_stats.overestimates + log_stats.overestimates > 0 {
        anyhow::bail!("approximation overestimated the reference");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(U256::from(1000), U256::from(1000)), 0.0);
        assert!((relative_error(U256::from(1000), U256::from(999)) - 1e-3).abs() < 1e-12);
        assert_eq!(relative_error(U256::zero(), U256::from(5)), 0.0);

        let big = FIXED_ONE << 8;
        let err = relative_error(big, big - (big >> 20));
        assert!((err - 2f64.powi(-20)).abs() < 1e-12);
    }
}
