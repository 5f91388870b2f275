use brine_fp::UnsignedNumeric;
use crate::consts::*;
use crate::math::U256;

/// Views an 18-decimal amount as a brine-fp number (which shares the scale).
pub fn to_numeric(amount: U256) -> Option<UnsignedNumeric> {
    if amount.bits() > 128 {
        return None;
    }
    Some(UnsignedNumeric::from_scaled_u128(amount.as_u128()))
}

/// Converts a 2^125 fixed-point value to brine-fp's 10^18 scale, truncating.
pub fn fixed_to_numeric(value: U256) -> Option<UnsignedNumeric> {
    let scaled = value.checked_mul(U256::exp10(AMOUNT_DECIMALS as usize))? >> PRECISION;
    to_numeric(scaled)
}

/// Renders an amount with its decimal point, falling back to raw units when
/// it is too large to scale.
pub fn format_amount(amount: U256) -> String {
    to_numeric(amount)
        .map(|n| n.to_string())
        .unwrap_or_else(|| amount.to_string())
}

pub fn format_fixed(value: U256) -> String {
    fixed_to_numeric(value)
        .map(|n| n.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Whole tokens to 18-decimal units.
pub fn tokens(amount: u64) -> U256 {
    U256::from(amount) * U256::exp10(AMOUNT_DECIMALS as usize)
}
