use crate::math::U256;

// Fixed-point scale: 1.0 == 2^125
pub const PRECISION: usize              = 125;
pub const FIXED_ONE: U256               = U256([0, 1 << 61, 0, 0]);

// Scale of the curve coefficients alpha and beta: 1.0 == 10^34
pub const COEF_SCALE: U256              = U256([0x378d8e6400000000, 0x0001ed09bead87c0, 0, 0]);

// Width of every runtime intermediate
pub const TARGET_BITS: usize            = 256;

// Fractional bits of the offline builder's working precision
pub const BUILDER_PRECISION: usize      = 384;

// exp(x) is supported for x < 2^EXP_MAX_HI_TERM_VAL
pub const EXP_MAX_HI_TERM_VAL: u32      = 3;
pub const EXP_NUM_OF_HI_TERMS: u32      = 6;

// log(x) is supported for 1 <= x < e^LOG_MAX_HI_TERM_VAL
pub const LOG_MAX_HI_TERM_VAL: u32      = 3;
pub const LOG_NUM_OF_HI_TERMS: u32      = 9;

pub const DEFAULT_ROWS: usize           = 95;
pub const DEFAULT_COLS: usize           = 11;
pub const DEFAULT_TIMEOUT: u64          = 86_400; // Seconds an epoch timer runs before it expires

pub const AMOUNT_DECIMALS: u8           = 18;

// Price band parameters, expressed in billionths
pub const BAND_ONE: u64                 = 1_000_000_000;
pub const BAND_MIN_RESERVE_RATIO: u64   = 100_000_000;   // 0.1
pub const BAND_MAX_RESERVE_RATIO: u64   = 1_000_000_000; // 1.0
pub const BAND_MIN_FEE: u64             = 1_500_000;     // 0.15%
pub const BAND_MAX_FEE: u64             = 150_000_000;   // 15%
pub const BAND_MIN_FEE_RATIO: u64       = 1_000_000_000; // reserve ratio at which the fee bottoms out
pub const BAND_MAX_FEE_RATIO: u64       = 100_000_000;   // reserve ratio at which the fee peaks
