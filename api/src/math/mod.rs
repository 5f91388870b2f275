// required for clippy
#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::reversed_empty_ranges)]

use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U1024(16);
}

pub mod fixed;
pub mod builder;
pub mod eval;
pub mod tables;

pub use fixed::*;
pub use builder::*;
pub use eval::*;
pub use tables::*;

/// One conditional step of the exp range reduction: when `bit` is set in the
/// input, the running result is multiplied by `num / den` (about e^bit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpHiTerm {
    pub bit: U256,
    pub num: U256,
    pub den: U256,
}

/// Polynomial coefficient of the exp remainder. The first entry holds the
/// common divisor; `ind` is the power of `y` the coefficient multiplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpLoTerm {
    pub val: U256,
    pub ind: u32,
}

/// Log range reduction step: inputs at or above `exp` contribute `val`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogHiTerm {
    pub val: U256,
    pub exp: U256,
}

/// Paired Maclaurin term of ln(1+y).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLoTerm {
    pub num: U256,
    pub den: U256,
}
