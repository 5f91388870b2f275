use crate::consts::*;
use crate::error::{CurveError, CurveResult};
use super::{add, mul, sub, U256};
use super::{ExpHiTerm, ExpLoTerm, LogHiTerm, LogLoTerm};
use super::{EXP_HI_TERMS, EXP_LO_TERMS, LOG_HI_TERMS, LOG_LO_TERMS};

/// e^(x / FIXED_ONE) * FIXED_ONE, rounded down, for x < 2^3 * FIXED_ONE.
pub fn exp(x: U256) -> CurveResult<U256> {
    exp_with(x, &EXP_HI_TERMS, &EXP_LO_TERMS)
}

/// ln(x / FIXED_ONE) * FIXED_ONE, for FIXED_ONE <= x < e^3 * FIXED_ONE.
pub fn log(x: U256) -> CurveResult<U256> {
    log_with(x, &LOG_HI_TERMS, &LOG_LO_TERMS)
}

/// (base_n / base_d) ^ (exp_n / exp_d) as a fixed-point value.
pub fn pow(base_n: U256, base_d: U256, exp_n: U256, exp_d: U256) -> CurveResult<U256> {
    if base_d.is_zero() {
        return Err(CurveError::domain("pow", base_d));
    }
    if exp_d.is_zero() {
        return Err(CurveError::domain("pow", exp_d));
    }

    let base = mul(base_n, FIXED_ONE)? / base_d;
    let exponent = mul(log(base)?, exp_n)? / exp_d;
    exp(exponent)
}

/// Runs the exp step sequence described by `hi` and `lo`.
///
/// The input is split into the bits covered by the hi terms and a remainder
/// below the smallest hi bit. The remainder goes through the polynomial, then
/// each set hi bit scales the result by its fraction. The last hi term only
/// carries the domain bound.
pub fn exp_with(x: U256, hi: &[ExpHiTerm], lo: &[ExpLoTerm]) -> CurveResult<U256> {
    let (Some(first), Some(last)) = (hi.first(), hi.last()) else {
        return Err(CurveError::domain("exp", x));
    };
    if x >= last.bit {
        return Err(CurveError::domain("exp", x));
    }

    let y = x % first.bit;
    let mut z = y;
    let mut res = U256::zero();
    for term in lo.iter().skip(1) {
        z = mul(z, y)? / FIXED_ONE;
        res = add(res, mul(z, term.val)?)?;
    }

    let divisor = lo.first().map_or(U256::one(), |term| term.val);
    res = add(add(res / divisor, y)?, FIXED_ONE)?;

    for term in &hi[..hi.len() - 1] {
        if !(x & term.bit).is_zero() {
            res = mul(res, term.num)? / term.den;
        }
    }

    Ok(res)
}

/// Runs the log step sequence described by `hi` and `lo`.
pub fn log_with(x: U256, hi: &[LogHiTerm], lo: &[LogLoTerm]) -> CurveResult<U256> {
    let Some(first) = hi.first() else {
        return Err(CurveError::domain("log", x));
    };
    if x < FIXED_ONE || x >= first.exp {
        return Err(CurveError::domain("log", x));
    }

    let mut res = U256::zero();
    let mut x = x;
    for term in hi.iter().skip(1) {
        if x >= term.exp {
            res = add(res, term.val)?;
            x = mul(x, FIXED_ONE)? / term.exp;
        }
    }

    // ln(1+y) = sum over k of y^(2k+1) * (num_k - y) / den_k
    let y = x - FIXED_ONE;
    let w = mul(y, y)? / FIXED_ONE;
    let mut z = y;
    for (i, term) in lo.iter().enumerate() {
        res = add(res, mul(z, sub(term.num, y)?)? / term.den)?;
        if i + 1 < lo.len() {
            z = mul(z, w)? / FIXED_ONE;
        }
    }

    Ok(res)
}

pub fn exp_domain_bound() -> U256 {
    EXP_HI_TERMS[EXP_HI_TERMS.len() - 1].bit
}

pub fn log_domain_bound() -> U256 {
    LOG_HI_TERMS[0].exp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{reference_exp, to_fixed};

    #[test]
    fn test_exp_identities() {
        assert_eq!(exp(U256::zero()).unwrap(), FIXED_ONE);
        assert_eq!(exp_domain_bound(), to_fixed(8));

        let max = exp_domain_bound() - U256::one();
        assert!(exp(max).is_ok());
        assert_eq!(exp(exp_domain_bound()), Err(CurveError::domain("exp", exp_domain_bound())));
    }

    #[test]
    fn test_exp_never_overestimates() {
        let step = exp_domain_bound() / 997;
        let mut x = U256::zero();
        while x < exp_domain_bound() {
            let approx = exp(x).unwrap();
            let exact = reference_exp(x).unwrap();
            assert!(approx <= exact, "exp({}) = {} > {}", x, approx, exact);

            // within 1e-30 relative
            let gap = exact - approx;
            assert!(gap * U256::from(10u64).pow(U256::from(30u64)) <= exact);
            x = x + step;
        }
    }

    #[test]
    fn test_log_identities() {
        assert_eq!(log(FIXED_ONE).unwrap(), U256::zero());
        assert!(log(FIXED_ONE - U256::one()).is_err());
        assert!(log(log_domain_bound()).is_err());
        assert!(log(log_domain_bound() - U256::one()).is_ok());
    }

    #[test]
    fn test_log_inverts_exp() {
        for n in [1u64, 2, 3, 5, 7, 11, 19] {
            let x = to_fixed(n);
            let l = log(x).unwrap();
            let back = reference_exp(l).unwrap();
            assert!(back <= x);
            assert!(x - back < U256::from(1_000u64));
        }
    }

    #[test]
    fn test_pow() {
        let two = U256::from(2u64);
        let four = U256::from(4u64);
        let one = U256::one();

        // 4^(1/2)
        let root = pow(four, one, one, two).unwrap();
        assert!(root <= to_fixed(2));
        assert!(to_fixed(2) - root < U256::from(1_000_000u64));

        // 18^3 leaves the exp domain, 21 leaves the log domain
        assert!(matches!(pow(U256::from(18u64), one, U256::from(3u64), one), Err(CurveError::Domain { func: "exp", .. })));
        assert!(matches!(pow(U256::from(21u64), one, one, one), Err(CurveError::Domain { func: "log", .. })));
        assert!(pow(two, one, U256::from(3u64), one).unwrap() <= to_fixed(8));
        assert_eq!(pow(two, U256::zero(), one, one), Err(CurveError::domain("pow", U256::zero())));
        assert_eq!(pow(two, one, one, U256::zero()), Err(CurveError::domain("pow", U256::zero())));
    }
}
