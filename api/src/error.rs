use thiserror::Error;
use crate::math::U256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("{func}: argument {value} is outside the supported domain")]
    Domain { func: &'static str, value: U256 },

    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },

    #[error("state violation: {0}")]
    State(#[from] StateViolation),

    #[error("{what} {value} is out of bounds (limit {bound})")]
    Bound { what: &'static str, value: U256, bound: U256 },

    #[error("position ({row}, {col}) is outside a {rows}x{cols} table")]
    Index { row: usize, col: usize, rows: usize, cols: usize },

    #[error("invalid curve config: {0}")]
    Config(String),

    #[error("mint listener failed: {0}")]
    Listener(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateViolation {
    #[error("interval table is locked")]
    TableLocked,

    #[error("interval table must be locked before trading")]
    TableUnlocked,

    /// A timer starts once per epoch; this covers running and expired timers alike.
    #[error("timer for row {row} has already been started")]
    TimerStarted { row: usize },

    #[error("timer for row {row} is not running")]
    TimerNotRunning { row: usize },

    #[error("cursor cannot retreat past ({row}, {col})")]
    CursorAtOrigin { row: usize, col: usize },

    #[error("cursor cannot advance past row {row}")]
    CursorAtEnd { row: usize },

    #[error("cannot sell {amount} out of a total supply of {supply}")]
    SupplyUnderflow { amount: U256, supply: U256 },

    #[error("row {row} starts at supply {next_min}, below the previous row's {curr_max}")]
    NonMonotonicSupply { row: usize, curr_max: U256, next_min: U256 },
}

pub type CurveResult<T> = Result<T, CurveError>;

impl CurveError {
    pub fn domain(func: &'static str, value: U256) -> Self {
        CurveError::Domain { func, value }
    }

    pub fn overflow(op: &'static str) -> Self {
        CurveError::Overflow { op }
    }
}
