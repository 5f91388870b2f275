use serde::{Deserialize, Serialize};
use crate::consts::*;
use crate::error::{CurveError, CurveResult};
use crate::math::{add, mul, mul_div, sub, U256};
use crate::state::IntervalTable;

/// Fee band configuration. Every field is a fraction in billionths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBandParams {
    pub min_reserve_ratio: u64,
    pub max_reserve_ratio: u64,
    pub min_fee: u64,
    pub max_fee: u64,
    pub min_fee_reserve_ratio: u64,     // Reserve ratio where the fee bottoms out
    pub max_fee_reserve_ratio: u64,     // Reserve ratio where the fee peaks
}

impl Default for PriceBandParams {
    fn default() -> Self {
        Self {
            min_reserve_ratio: BAND_MIN_RESERVE_RATIO,
            max_reserve_ratio: BAND_MAX_RESERVE_RATIO,
            min_fee: BAND_MIN_FEE,
            max_fee: BAND_MAX_FEE,
            min_fee_reserve_ratio: BAND_MIN_FEE_RATIO,
            max_fee_reserve_ratio: BAND_MAX_FEE_RATIO,
        }
    }
}

/// Bounds trade amounts to a corridor around the curve's instantaneous price.
///
/// The variable fee `w = gamma / rr - delta` falls as the reserve ratio `rr`
/// rises. Buys are scaled by `1 / (1 + w)` and sells by `1 - w`, and neither
/// ever pays out more than the flat minimum fee allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceBandGuard {
    pub min_rr: U256,
    pub max_rr: U256,
    pub gamma: U256,
    pub delta: U256,
    pub buy_n: U256,
    pub buy_d: U256,
    pub sell_n: U256,
    pub sell_d: U256,
    pub max_sdr: U256,     // Largest reserve amount either direction accepts
}

fn gcd(mut a: U256, mut b: U256) -> U256 {
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// n / d in lowest terms
fn reduce(n: U256, d: U256) -> (U256, U256) {
    let g = gcd(n, d);
    if g.is_zero() {
        return (n, d);
    }
    (n / g, d / g)
}

impl PriceBandGuard {
    /// Derives the band constants for a curve whose reserve tops out at `max_reserve`.
    pub fn new(params: &PriceBandParams, max_reserve: U256) -> CurveResult<Self> {
        let one = U256::from(BAND_ONE);
        let min_fee = U256::from(params.min_fee);
        let max_fee = U256::from(params.max_fee);
        let r_min_fee = U256::from(params.min_fee_reserve_ratio);
        let r_max_fee = U256::from(params.max_fee_reserve_ratio);

        if params.min_reserve_ratio == 0 || params.min_reserve_ratio > params.max_reserve_ratio {
            return Err(CurveError::Config("reserve ratio band is empty".into()));
        }
        if params.min_fee > params.max_fee || params.min_fee >= BAND_ONE {
            return Err(CurveError::Config("fee range is invalid".into()));
        }
        if params.max_fee_reserve_ratio == 0 || params.min_fee_reserve_ratio <= params.max_fee_reserve_ratio {
            return Err(CurveError::Config("fee must peak at the lower reserve ratio".into()));
        }

        let fee_span = max_fee - min_fee;
        let ratio_span = r_min_fee - r_max_fee;

        // factor = fee_span / (1 / r_max_fee - 1 / r_min_fee)
        let gamma = mul_div(
            mul(mul(fee_span, r_max_fee)?, r_min_fee)?,
            COEF_SCALE,
            mul(one, ratio_span)?,
        )?;

        // offset = factor / r_min_fee - min_fee
        let delta = sub(mul(fee_span, r_max_fee)?, mul(min_fee, ratio_span)?)
            .map_err(|_| CurveError::Config("fee band offset is negative".into()))?
            / ratio_span;
        if delta >= one {
            return Err(CurveError::Config("fee band offset exceeds one".into()));
        }

        let min_rr = mul_div(U256::from(params.min_reserve_ratio), COEF_SCALE, one)?;
        let max_rr = mul_div(U256::from(params.max_reserve_ratio), COEF_SCALE, one)?;

        // the sell fee must stay below one across the whole band
        if mul(min_rr, add(one, delta)?)? < gamma {
            return Err(CurveError::Config("sell fee exceeds one at the minimum reserve ratio".into()));
        }

        let (buy_n, buy_d) = reduce(one, add(one, min_fee)?);
        let (sell_n, sell_d) = reduce(one - min_fee, one);

        Ok(Self {
            min_rr,
            max_rr,
            gamma,
            delta,
            buy_n,
            buy_d,
            sell_n,
            sell_d,
            max_sdr: mul_div(max_reserve, buy_d, buy_n)?,
        })
    }

    pub fn for_table(params: &PriceBandParams, table: &IntervalTable) -> CurveResult<Self> {
        Self::new(params, table.max_reserve()?)
    }

    fn reserve_ratio(&self, amount: U256, supply_total: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
        if amount > self.max_sdr {
            return Err(CurveError::Bound {
                what: "reserve amount",
                value: amount,
                bound: self.max_sdr,
            });
        }

        let rr = alpha.checked_sub(mul(beta, supply_total)?).unwrap_or_default();
        if rr < self.min_rr {
            return Err(CurveError::Bound {
                what: "reserve ratio",
                value: rr,
                bound: self.min_rr,
            });
        }
        if rr > self.max_rr {
            return Err(CurveError::Bound {
                what: "reserve ratio",
                value: rr,
                bound: self.max_rr,
            });
        }

        Ok(rr)
    }

    /// Reserve that actually enters the curve for a buy of `amount`.
    pub fn buy(&self, amount: U256, supply_total: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
        let rr = self.reserve_ratio(amount, supply_total, alpha, beta)?;
        let one = U256::from(BAND_ONE);

        // amount / (1 + w)
        let variable = mul_div(
            amount,
            mul(rr, one)?,
            add(mul(rr, one - self.delta)?, self.gamma)?,
        )?;
        let constant = mul_div(amount, self.buy_n, self.buy_d)?;

        Ok(variable.min(constant))
    }

    /// Reserve paid out for a sell whose curve value is `amount`.
    pub fn sell(&self, amount: U256, supply_total: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
        let rr = self.reserve_ratio(amount, supply_total, alpha, beta)?;
        let one = U256::from(BAND_ONE);

        // amount * (1 - w)
        let variable = mul_div(
            amount,
            sub(mul(rr, add(one, self.delta)?)?, self.gamma)?,
            mul(rr, one)?,
        )?;
        let constant = mul_div(amount, self.sell_n, self.sell_d)?;

        Ok(variable.min(constant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(amount: u64) -> U256 {
        U256::from(amount) * U256::exp10(18)
    }

    fn dec(value: &str) -> U256 {
        U256::from_dec_str(value).unwrap()
    }

    fn guard() -> PriceBandGuard {
        PriceBandGuard::new(&PriceBandParams::default(), tokens(8_000_000)).unwrap()
    }

    #[test]
    fn test_default_constants() {
        let guard = guard();
        assert_eq!(guard.gamma, U256::from(165u64) * U256::exp10(39));
        assert_eq!(guard.delta, U256::from(15_000_000u64));
        assert_eq!((guard.buy_n, guard.buy_d), (U256::from(2000u64), U256::from(2003u64)));
        assert_eq!((guard.sell_n, guard.sell_d), (U256::from(1997u64), U256::from(2000u64)));
        assert_eq!(guard.min_rr, U256::exp10(33));
        assert_eq!(guard.max_rr, COEF_SCALE);
        assert_eq!(guard.max_sdr, tokens(8_000_000) * U256::from(2003u64) / U256::from(2000u64));
    }

    #[test]
    fn test_fees_follow_reserve_ratio() {
        let guard = guard();
        let amount = tokens(1000);
        let zero = U256::zero();

        // at a full reserve ratio both fees sit at the floor
        assert_eq!(guard.buy(amount, zero, COEF_SCALE, zero).unwrap(), dec("998502246630054917623"));
        assert_eq!(guard.sell(amount, zero, COEF_SCALE, zero).unwrap(), dec("998500000000000000000"));

        let half = COEF_SCALE / U256::from(2u64);
        assert_eq!(guard.buy(amount, zero, half, zero).unwrap(), dec("982318271119842829076"));
        assert_eq!(guard.sell(amount, zero, half, zero).unwrap(), dec("982000000000000000000"));

        // rr = alpha - beta * n = 0.1
        let alpha = U256::from(2u64) * U256::exp10(33);
        let beta = U256::from(1_000_000_000u64);
        let supply = U256::exp10(24);
        assert_eq!(guard.buy(amount, supply, alpha, beta).unwrap(), dec("869565217391304347826"));
        assert_eq!(guard.sell(amount, supply, alpha, beta).unwrap(), dec("850000000000000000000"));
    }

    #[test]
    fn test_amount_above_safe_maximum() {
        let guard = guard();
        let zero = U256::zero();

        assert!(guard.buy(guard.max_sdr, zero, COEF_SCALE, zero).is_ok());
        assert_eq!(
            guard.buy(guard.max_sdr + U256::one(), zero, COEF_SCALE, zero),
            Err(CurveError::Bound {
                what: "reserve amount",
                value: guard.max_sdr + U256::one(),
                bound: guard.max_sdr,
            })
        );
        assert!(guard.sell(guard.max_sdr + U256::one(), zero, COEF_SCALE, zero).is_err());
    }

    #[test]
    fn test_reserve_ratio_outside_band() {
        let guard = guard();
        let amount = tokens(1);
        let zero = U256::zero();

        let low = guard.min_rr - U256::one();
        assert!(matches!(guard.buy(amount, zero, low, zero), Err(CurveError::Bound { what: "reserve ratio", .. })));

        let high = guard.max_rr + U256::one();
        assert!(matches!(guard.sell(amount, zero, high, zero), Err(CurveError::Bound { what: "reserve ratio", .. })));

        // beta * n beyond alpha
        let beta = U256::from(1_000_000_000u64);
        assert!(guard.buy(amount, tokens(100_000_000), COEF_SCALE, beta).is_err());
    }

    #[test]
    fn test_invalid_params() {
        let params = PriceBandParams {
            min_fee_reserve_ratio: 100_000_000,
            max_fee_reserve_ratio: 1_000_000_000,
            ..PriceBandParams::default()
        };
        assert!(matches!(PriceBandGuard::new(&params, tokens(1)), Err(CurveError::Config(_))));

        let params = PriceBandParams {
            min_fee: 200_000_000,
            ..PriceBandParams::default()
        };
        assert!(PriceBandGuard::new(&params, tokens(1)).is_err());
    }

    #[test]
    fn test_band_floor_below_fee_curve() {
        // at 1% reserve ratio the variable sell fee would pass 100%
        let params = PriceBandParams {
            min_reserve_ratio: 10_000_000,
            ..PriceBandParams::default()
        };
        assert_eq!(
            PriceBandGuard::new(&params, tokens(1)),
            Err(CurveError::Config("sell fee exceeds one at the minimum reserve ratio".into()))
        );

        let params = PriceBandParams {
            min_reserve_ratio: 200_000_000,
            ..PriceBandParams::default()
        };
        let guard = PriceBandGuard::new(&params, tokens(1)).unwrap();
        assert!(guard.sell(tokens(1) / U256::from(2u64), U256::zero(), guard.min_rr, U256::zero()).is_ok());
    }
}
