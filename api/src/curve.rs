use crate::consts::*;
use crate::error::{CurveError, CurveResult};
use crate::math::{add, div, mul, mul_div, pow, sub, U256};

/// A segment with alpha == 1 and beta == 0 prices supply linearly.
pub fn is_trivial(alpha: U256, beta: U256) -> bool {
    alpha == COEF_SCALE && beta.is_zero()
}

/// Supply matching `val_r` reserve on a linear segment.
pub fn get_val_n(val_r: U256, max_n: U256, max_r: U256) -> CurveResult<U256> {
    mul_div(val_r, max_n, max_r)
}

/// Reserve matching `val_n` supply on a linear segment.
pub fn get_val_r(val_n: U256, max_r: U256, max_n: U256) -> CurveResult<U256> {
    mul_div(val_n, max_r, max_n)
}

/// Total supply once the segment's reserve reaches `new_r`.
///
/// With a = alpha / COEF_SCALE and b = beta / COEF_SCALE:
/// N(R) = a * t / (a / minN + b * (t - 1)), where t = (R / minR) ^ a
pub fn get_new_n(new_r: U256, min_r: U256, min_n: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
    if min_n.is_zero() {
        return Err(CurveError::domain("get_new_n", min_n));
    }

    let t = pow(new_r, min_r, alpha, COEF_SCALE)?;
    let growth = t
        .checked_sub(FIXED_ONE)
        .ok_or(CurveError::domain("get_new_n", new_r))?;

    let numerator = mul(alpha, t)?;
    let denominator = add(mul(alpha, FIXED_ONE)? / min_n, mul(beta, growth)?)?;
    div(numerator, denominator)
}

/// Total reserve once the segment's supply reaches `new_n`.
///
/// R(N) = minR * ((a - b * minN) / (a - b * N) * N / minN) ^ (1 / a)
pub fn get_new_r(new_n: U256, min_n: U256, min_r: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
    let t1 = reserve_ratio(alpha, beta, min_n, "get_new_r")?;
    let t2 = reserve_ratio(alpha, beta, new_n, "get_new_r")?;

    // divide before pow so the log argument stays inside 256 bits
    let base = mul(t1, new_n)? / t2;
    let t = pow(base, min_n, COEF_SCALE, alpha)?;
    Ok(mul(t, min_r)? / FIXED_ONE)
}

/// `get_new_r` pushed above the truncation in `get_new_n` and `get_new_r`.
///
/// Any supply `get_new_n` hands out for a reserve `r` maps back to at least
/// `r` here, so selling down to that supply never pays out reserve that was
/// not put in.
pub fn get_new_r_upper(new_n: U256, min_n: U256, min_r: U256, alpha: U256, beta: U256) -> CurveResult<U256> {
    let r = get_new_r(add(new_n, U256::from(2u64))?, min_n, min_r, alpha, beta)?;
    add(add(r, r >> 96)?, U256::from(2u64))
}

/// alpha - beta * n, which must stay positive.
pub fn reserve_ratio(alpha: U256, beta: U256, n: U256, func: &'static str) -> CurveResult<U256> {
    let ratio = sub(alpha, mul(beta, n)?).map_err(|_| CurveError::domain(func, n))?;
    if ratio.is_zero() {
        return Err(CurveError::domain(func, n));
    }
    Ok(ratio)
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

    const ALPHA: u64 = 9;
    const BETA: u64 = 1_000_000_000;

    fn alpha() -> U256 {
        U256::from(ALPHA) * U256::exp10(33)
    }

    fn beta() -> U256 {
        U256::from(BETA)
    }

    #[test]
    fn test_trivial_segment() {
        assert!(is_trivial(COEF_SCALE, U256::zero()));
        assert!(!is_trivial(alpha(), U256::zero()));
        assert!(!is_trivial(COEF_SCALE, U256::one()));

        let n = get_val_n(U256::from(500u64), U256::from(1000u64), U256::from(1000u64)).unwrap();
        assert_eq!(n, U256::from(500u64));

        // 7 * 3 / 11 truncates
        let r = get_val_r(U256::from(7u64), U256::from(3u64), U256::from(11u64)).unwrap();
        assert_eq!(r, U256::one());
        assert!(get_val_n(U256::one(), U256::one(), U256::zero()).is_err());
    }

    #[test]
    fn test_new_n_across_segment() {
        let (min_n, min_r) = (tokens(1_100_000), tokens(1_000_000));

        assert_eq!(get_new_n(min_r, min_r, min_n, alpha(), beta()).unwrap(), min_n);
        assert_eq!(
            get_new_n(tokens(1_500_000), min_r, min_n, alpha(), beta()).unwrap(),
            dec("1503508189185749407395126")
        );
        assert_eq!(
            get_new_n(tokens(2_000_000), min_r, min_n, alpha(), beta()).unwrap(),
            dec("1856190192269485081812677")
        );
    }

    #[test]
    fn test_new_r_inverts_new_n() {
        let (min_n, min_r) = (tokens(1_100_000), tokens(1_000_000));

        assert_eq!(get_new_r(min_n, min_n, min_r, alpha(), beta()).unwrap(), min_r);

        let max_n = dec("1856190192269485081812677");
        let max_r = get_new_r(max_n, min_n, min_r, alpha(), beta()).unwrap();
        assert!(max_r <= tokens(2_000_000));
        assert!(tokens(2_000_000) - max_r < U256::from(10u64));
    }

    #[test]
    fn test_new_r_upper_covers_new_n() {
        let (min_n, min_r) = (tokens(1_100_000), tokens(1_000_000));
        assert!(get_new_r_upper(min_n, min_n, min_r, alpha(), beta()).unwrap() >= min_r);

        for reserve in [1_000_001u64, 1_234_567, 1_700_000, 1_999_999] {
            let r = tokens(reserve) + U256::from(7u64);
            let n = get_new_n(r, min_r, min_n, alpha(), beta()).unwrap();
            let upper = get_new_r_upper(n, min_n, min_r, alpha(), beta()).unwrap();
            assert!(upper >= r, "{} < {}", upper, r);
            assert!(upper - r < tokens(1) / U256::from(1_000_000u64));
        }
    }

    #[test]
    fn test_domain_errors() {
        let zero = U256::zero();
        assert_eq!(
            get_new_n(tokens(1), tokens(1), zero, alpha(), beta()),
            Err(CurveError::domain("get_new_n", zero))
        );

        // below the segment start the power drops under one
        assert!(matches!(
            get_new_n(tokens(1), tokens(2), tokens(2), alpha(), beta()),
            Err(CurveError::Domain { .. })
        ));

        // beta * n reaches alpha
        let n = alpha() / beta();
        assert_eq!(
            get_new_r(n, tokens(1), tokens(1), alpha(), beta()),
            Err(CurveError::domain("get_new_r", n))
        );
    }
}
