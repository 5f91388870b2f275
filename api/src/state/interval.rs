use crate::consts::*;
use crate::error::{CurveError, CurveResult, StateViolation};
use crate::math::U256;

/// One segment of the curve. Supply bounds are in `n`, reserve bounds in `r`,
/// and the pricing coefficients are scaled by COEF_SCALE.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    pub min_n: U256,
    pub max_n: U256,
    pub min_r: U256,
    pub max_r: U256,
    pub alpha: U256,
    pub beta: U256,
}

impl Interval {
    /// A segment priced linearly between its bounds.
    pub fn is_trivial(&self) -> bool {
        self.alpha == COEF_SCALE && self.beta.is_zero()
    }

    pub fn coefs(&self) -> (U256, U256) {
        (self.alpha, self.beta)
    }
}

/// Grid of curve segments: one row per mint epoch, one column per sub-segment.
/// Writable until locked, read-only afterwards.
#[derive(Clone, Debug)]
pub struct IntervalTable {
    rows: usize,
    cols: usize,
    intervals: Vec<Interval>,
    locked: bool,
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl IntervalTable {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            intervals: vec![Interval::default(); rows * cols],
            locked: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn offset(&self, row: usize, col: usize) -> CurveResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CurveError::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn set_interval(&mut self, row: usize, col: usize, interval: Interval) -> CurveResult<()> {
        if self.locked {
            return Err(StateViolation::TableLocked.into());
        }

        let offset = self.offset(row, col)?;
        self.intervals[offset] = interval;
        Ok(())
    }

    /// Freezes the table. Locking twice is reported as a violation.
    pub fn lock(&mut self) -> CurveResult<()> {
        if self.locked {
            return Err(StateViolation::TableLocked.into());
        }

        self.locked = true;
        tracing::debug!(rows = self.rows, cols = self.cols, "interval table locked");
        Ok(())
    }

    pub fn get_interval(&self, row: usize, col: usize) -> CurveResult<Interval> {
        Ok(self.intervals[self.offset(row, col)?])
    }

    pub fn get_coefs(&self, row: usize, col: usize) -> CurveResult<(U256, U256)> {
        Ok(self.get_interval(row, col)?.coefs())
    }

    /// Supply released when the curve moves from `row` into the next epoch.
    pub fn required_mint_amount(&self, row: usize) -> CurveResult<U256> {
        let curr_max = self.get_interval(row, 0)?.max_n;
        let next_min = self.get_interval(row + 1, 0)?.min_n;

        next_min
            .checked_sub(curr_max)
            .ok_or_else(|| StateViolation::NonMonotonicSupply { row: row + 1, curr_max, next_min }.into())
    }

    /// Largest reserve the curve can hold: the end of the last epoch's base segment.
    pub fn max_reserve(&self) -> CurveResult<U256> {
        let last = self.rows.checked_sub(1).ok_or(CurveError::Index {
            row: 0,
            col: 0,
            rows: self.rows,
            cols: self.cols,
        })?;
        Ok(self.get_interval(last, 0)?.max_r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(min_n: u64, max_n: u64, min_r: u64, max_r: u64) -> Interval {
        Interval {
            min_n: U256::from(min_n),
            max_n: U256::from(max_n),
            min_r: U256::from(min_r),
            max_r: U256::from(max_r),
            alpha: COEF_SCALE,
            beta: U256::zero(),
        }
    }

    #[test]
    fn test_lock_blocks_writes_but_not_reads() {
        let mut table = IntervalTable::new(2, 2);
        table.set_interval(0, 0, segment(0, 1000, 0, 1000)).unwrap();
        table.lock().unwrap();

        assert_eq!(
            table.set_interval(0, 1, segment(0, 1, 0, 1)),
            Err(CurveError::State(StateViolation::TableLocked))
        );
        assert_eq!(table.lock(), Err(CurveError::State(StateViolation::TableLocked)));

        let interval = table.get_interval(0, 0).unwrap();
        assert_eq!(interval.max_r, U256::from(1000u64));
        assert!(interval.is_trivial());
        assert_eq!(table.get_coefs(0, 0).unwrap(), (COEF_SCALE, U256::zero()));
    }

    #[test]
    fn test_out_of_range_reads_fail() {
        let table = IntervalTable::new(3, 2);
        assert_eq!(
            table.get_interval(3, 0),
            Err(CurveError::Index { row: 3, col: 0, rows: 3, cols: 2 })
        );
        assert!(table.get_coefs(0, 2).is_err());
    }

    #[test]
    fn test_required_mint_amount() {
        let mut table = IntervalTable::new(3, 1);
        table.set_interval(0, 0, segment(0, 1000, 0, 1000)).unwrap();
        table.set_interval(1, 0, segment(1100, 2000, 1000, 2000)).unwrap();
        table.set_interval(2, 0, segment(1900, 3000, 2000, 3000)).unwrap();

        assert_eq!(table.required_mint_amount(0).unwrap(), U256::from(100u64));
        assert!(matches!(
            table.required_mint_amount(1),
            Err(CurveError::State(StateViolation::NonMonotonicSupply { row: 2, .. }))
        ));
        assert!(matches!(table.required_mint_amount(2), Err(CurveError::Index { .. })));
        assert_eq!(table.max_reserve().unwrap(), U256::from(3000u64));
    }

    #[test]
    fn test_default_dimensions() {
        let table = IntervalTable::default();
        assert_eq!((table.rows(), table.cols()), (95, 11));
        assert!(!table.is_locked());
    }
}
