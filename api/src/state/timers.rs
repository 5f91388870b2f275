use crate::consts::*;
use crate::error::{CurveError, CurveResult, StateViolation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Timestamp {
    valid: bool,
    value: u64,   // Clock value when the timer started
}

/// Per-row minting eligibility timers.
///
/// A timer is idle until started, running while less than `timeout` has
/// elapsed, and expired afterwards. Only a running timer can be reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpochTimers {
    timeout: u64,
    timestamps: Vec<Timestamp>,
}

impl Default for EpochTimers {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_TIMEOUT)
    }
}

impl EpochTimers {
    pub fn new(rows: usize, timeout: u64) -> Self {
        Self {
            timeout,
            timestamps: vec![Timestamp::default(); rows],
        }
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    fn slot(&mut self, id: usize) -> CurveResult<&mut Timestamp> {
        let rows = self.timestamps.len();
        self.timestamps.get_mut(id).ok_or(CurveError::Index {
            row: id,
            col: 0,
            rows,
            cols: 1,
        })
    }

    pub fn start(&mut self, id: usize, now: u64) -> CurveResult<()> {
        let timestamp = self.slot(id)?;
        if timestamp.valid {
            return Err(StateViolation::TimerStarted { row: id }.into());
        }

        timestamp.valid = true;
        timestamp.value = now;
        tracing::debug!(row = id, now, "epoch timer started");
        Ok(())
    }

    pub fn reset(&mut self, id: usize, now: u64) -> CurveResult<()> {
        if !self.running(id, now) {
            return Err(StateViolation::TimerNotRunning { row: id }.into());
        }

        let timestamp = self.slot(id)?;
        timestamp.valid = false;
        timestamp.value = 0;
        tracing::debug!(row = id, now, "epoch timer reset");
        Ok(())
    }

    fn elapsed(&self, id: usize, now: u64) -> Option<u64> {
        self.timestamps
            .get(id)
            .filter(|t| t.valid)
            .map(|t| now.saturating_sub(t.value))
    }

    pub fn running(&self, id: usize, now: u64) -> bool {
        self.elapsed(id, now).is_some_and(|elapsed| elapsed < self.timeout)
    }

    pub fn expired(&self, id: usize, now: u64) -> bool {
        self.elapsed(id, now).is_some_and(|elapsed| elapsed >= self.timeout)
    }

    pub fn started_at(&self, id: usize) -> Option<u64> {
        self.timestamps.get(id).filter(|t| t.valid).map(|t| t.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_lifecycle() {
        let mut timers = EpochTimers::new(4, 100);
        assert!(!timers.running(1, 0));
        assert!(!timers.expired(1, 0));

        timers.start(1, 50).unwrap();
        assert_eq!(timers.started_at(1), Some(50));
        assert!(timers.running(1, 50));
        assert!(timers.running(1, 149));
        assert!(!timers.expired(1, 149));
        assert!(timers.expired(1, 150));
        assert!(!timers.running(1, 150));

        timers.reset(1, 120).unwrap();
        assert!(!timers.running(1, 120));
        assert_eq!(timers.started_at(1), None);
    }

    #[test]
    fn test_timer_violations() {
        let mut timers = EpochTimers::new(4, 100);
        assert_eq!(
            timers.reset(2, 0),
            Err(CurveError::State(StateViolation::TimerNotRunning { row: 2 }))
        );

        timers.start(2, 0).unwrap();
        assert_eq!(
            timers.start(2, 10),
            Err(CurveError::State(StateViolation::TimerStarted { row: 2 }))
        );

        // expired timers cannot be reset
        assert_eq!(
            timers.reset(2, 100),
            Err(CurveError::State(StateViolation::TimerNotRunning { row: 2 }))
        );
        assert!(matches!(timers.start(4, 0), Err(CurveError::Index { row: 4, .. })));

        // an expired timer still counts as started
        assert!(timers.expired(2, 150));
        assert_eq!(
            timers.start(2, 150),
            Err(CurveError::State(StateViolation::TimerStarted { row: 2 }))
        );
    }
}
