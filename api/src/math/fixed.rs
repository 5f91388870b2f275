use crate::consts::*;
use crate::error::{CurveError, CurveResult};
use super::{U256, U1024};

pub fn add(a: U256, b: U256) -> CurveResult<U256> {
    a.checked_add(b).ok_or(CurveError::overflow("add"))
}

pub fn sub(a: U256, b: U256) -> CurveResult<U256> {
    a.checked_sub(b).ok_or(CurveError::overflow("sub"))
}

pub fn mul(a: U256, b: U256) -> CurveResult<U256> {
    a.checked_mul(b).ok_or(CurveError::overflow("mul"))
}

/// Truncating division. A zero divisor is reported against the dividend.
pub fn div(a: U256, b: U256) -> CurveResult<U256> {
    a.checked_div(b).ok_or(CurveError::domain("div", a))
}

/// `a * b / c`, truncated, with the product bounded by 256 bits.
pub fn mul_div(a: U256, b: U256, c: U256) -> CurveResult<U256> {
    div(mul(a, b)?, c)
}

/// `a * FIXED_ONE / b`
pub fn to_fixed_ratio(a: U256, b: U256) -> CurveResult<U256> {
    mul_div(a, FIXED_ONE, b)
}

/// `a * b / FIXED_ONE`
pub fn fixed_mul(a: U256, b: U256) -> CurveResult<U256> {
    Ok(mul(a, b)? >> PRECISION)
}

pub fn to_fixed(value: u64) -> U256 {
    U256::from(value) << PRECISION
}

pub fn widen(value: U256) -> U1024 {
    let mut limbs = [0u64; 16];
    limbs[..4].copy_from_slice(&value.0);
    U1024(limbs)
}

pub fn narrow(value: U1024) -> CurveResult<U256> {
    if value.bits() > TARGET_BITS {
        return Err(CurveError::overflow("narrow"));
    }

    let mut limbs = [0u64; 4];
    limbs.copy_from_slice(&value.0[..4]);
    Ok(U256(limbs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_truncates_toward_zero() {
        let seven = U256::from(7u64);
        let two = U256::from(2u64);
        assert_eq!(div(seven, two).unwrap(), U256::from(3u64));
        assert_eq!(mul_div(seven, seven, two).unwrap(), U256::from(24u64));
    }

    #[test]
    fn test_checked_ops_report_errors() {
        assert_eq!(mul(U256::max_value(), U256::from(2u64)), Err(CurveError::overflow("mul")));
        assert_eq!(sub(U256::zero(), U256::one()), Err(CurveError::overflow("sub")));
        assert!(matches!(div(U256::one(), U256::zero()), Err(CurveError::Domain { .. })));
    }

    #[test]
    fn test_fixed_scale() {
        assert_eq!(to_fixed(1), FIXED_ONE);
        assert_eq!(fixed_mul(to_fixed(3), to_fixed(5)).unwrap(), to_fixed(15));
        assert_eq!(to_fixed_ratio(U256::from(3u64), U256::from(2u64)).unwrap(), FIXED_ONE + (FIXED_ONE >> 1));
    }

    #[test]
    fn test_widen_narrow() {
        let value = U256::max_value() - U256::from(12345u64);
        assert_eq!(narrow(widen(value)).unwrap(), value);
        assert!(narrow(widen(U256::max_value()) + U1024::one()).is_err());
    }
}
