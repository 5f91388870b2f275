use std::path::Path;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::band::{PriceBandGuard, PriceBandParams};
use crate::consts::*;
use crate::engine::CurveEngine;
use crate::error::{CurveError, CurveResult};
use crate::math::U256;
use crate::state::{Interval, IntervalTable};

/// Amounts travel as decimal strings; underscores are allowed as separators.
pub mod decimal {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use crate::math::U256;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<U256, String> {
        let digits: String = raw.trim().chars().filter(|c| *c != '_').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("'{}' is not a decimal amount", raw));
        }
        U256::from_dec_str(&digits).map_err(|e| format!("'{}': {:?}", raw, e))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    pub row: usize,
    pub col: usize,
    #[serde(with = "decimal")]
    pub min_n: U256,
    #[serde(with = "decimal")]
    pub max_n: U256,
    #[serde(with = "decimal")]
    pub min_r: U256,
    #[serde(with = "decimal")]
    pub max_r: U256,
    #[serde(with = "decimal")]
    pub alpha: U256,
    #[serde(with = "decimal")]
    pub beta: U256,
}

impl IntervalConfig {
    pub fn interval(&self) -> Interval {
        Interval {
            min_n: self.min_n,
            max_n: self.max_n,
            min_r: self.min_r,
            max_r: self.max_r,
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

/// Everything needed to stand up a curve: table shape, epoch timeout, fee
/// band, and the populated intervals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub price_band: PriceBandParams,
    pub intervals: Vec<IntervalConfig>,
}

impl CurveConfig {
    pub fn from_json(json: &str) -> CurveResult<Self> {
        serde_json::from_str(json).map_err(|e| CurveError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CurveError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> CurveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CurveError::Config(e.to_string()))
    }

    /// Populates and locks a table.
    pub fn build_table(&self) -> CurveResult<IntervalTable> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CurveError::Config("table needs at least one row and one column".into()));
        }

        let mut table = IntervalTable::new(self.rows, self.cols);
        for entry in &self.intervals {
            table.set_interval(entry.row, entry.col, entry.interval())?;
        }
        table.lock()?;
        Ok(table)
    }

    pub fn build_engine(&self) -> CurveResult<CurveEngine> {
        let table = self.build_table()?;
        let band = PriceBandGuard::for_table(&self.price_band, &table)?;
        CurveEngine::new(Arc::new(table), band, self.timeout)
    }
}
