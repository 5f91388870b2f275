use crate::error::{CurveResult, StateViolation};
use crate::math::U256;
use super::{EpochTimers, Interval, IntervalTable};

/// Position of the curve inside its interval table.
///
/// Rows advance with supply, while columns count backwards: column 0 is the
/// base segment of a row and higher columns are the segments a falling supply
/// retreats through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurveCursor {
    row: usize,
    col: usize,
}

impl CurveCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn current_interval(&self, table: &IntervalTable) -> CurveResult<Interval> {
        table.get_interval(self.row, self.col)
    }

    pub fn current_coefs(&self, table: &IntervalTable) -> CurveResult<(U256, U256)> {
        table.get_coefs(self.row, self.col)
    }

    /// Steps forward. From a base segment this enters the next epoch and
    /// starts its timer.
    pub fn grow(&mut self, table: &IntervalTable, timers: &mut EpochTimers, now: u64) -> CurveResult<()> {
        if self.col > 0 {
            self.col -= 1;
            return Ok(());
        }

        let next = self.row + 1;
        if next >= table.rows() {
            return Err(StateViolation::CursorAtEnd { row: self.row }.into());
        }

        timers.start(next, now)?;
        self.row = next;
        tracing::debug!(row = self.row, "entered epoch");
        Ok(())
    }

    /// Steps backward. While the current epoch's timer is still running the
    /// epoch is abandoned: the timer resets and the cursor returns to the
    /// previous row, keeping its column. Otherwise the cursor moves to the
    /// next sub-segment of the row.
    pub fn shrink(&mut self, table: &IntervalTable, timers: &mut EpochTimers, now: u64) -> CurveResult<()> {
        if timers.running(self.row, now) {
            if self.row == 0 {
                return Err(StateViolation::CursorAtOrigin { row: self.row, col: self.col }.into());
            }

            timers.reset(self.row, now)?;
            self.row -= 1;
            tracing::debug!(row = self.row, "abandoned epoch");
            return Ok(());
        }

        if self.col + 1 >= table.cols() {
            return Err(StateViolation::CursorAtOrigin { row: self.row, col: self.col }.into());
        }

        self.col += 1;
        Ok(())
    }
}
