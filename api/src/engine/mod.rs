mod buy;
mod sell;

use std::sync::Arc;
use crate::band::PriceBandGuard;
use crate::error::{CurveResult, StateViolation};
use crate::math::U256;
use crate::state::*;

/// Everything a trade mutates. Trades run against a copy that replaces the
/// live state only when the whole trade succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveState {
    pub ledger: Ledger,
    pub cursor: CurveCursor,
    pub timers: EpochTimers,
}

impl CurveState {
    pub fn new(rows: usize, timeout: u64) -> Self {
        Self {
            ledger: Ledger::default(),
            cursor: CurveCursor::new(),
            timers: EpochTimers::new(rows, timeout),
        }
    }
}

/// Converts between reserve and supply by walking the interval table.
pub struct CurveEngine {
    table: Arc<IntervalTable>,
    band: PriceBandGuard,
    state: CurveState,
}

impl CurveEngine {
    pub fn new(table: Arc<IntervalTable>, band: PriceBandGuard, timeout: u64) -> CurveResult<Self> {
        if !table.is_locked() {
            return Err(StateViolation::TableUnlocked.into());
        }

        let state = CurveState::new(table.rows(), timeout);
        Ok(Self { table, band, state })
    }

    pub fn table(&self) -> &Arc<IntervalTable> {
        &self.table
    }

    pub fn band(&self) -> &PriceBandGuard {
        &self.band
    }

    pub fn state(&self) -> &CurveState {
        &self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.ledger
    }

    pub fn cursor(&self) -> &CurveCursor {
        &self.state.cursor
    }

    pub fn timers(&self) -> &EpochTimers {
        &self.state.timers
    }

    pub fn current_interval(&self) -> CurveResult<Interval> {
        self.state.cursor.current_interval(&self.table)
    }

    /// Buys supply with `reserve_in`, after the price band takes its fee.
    pub fn buy(&mut self, reserve_in: U256, now: u64) -> CurveResult<U256> {
        let band = self.band;
        self.transact(|state, table| {
            let (alpha, beta) = state.cursor.current_coefs(table)?;
            let amount = band.buy(reserve_in, state.ledger.supply_total(), alpha, beta)?;
            tracing::trace!(%reserve_in, %amount, "buy after fee");
            state.buy_curve(table, amount, now)
        })
    }

    /// Sells `supply_in` and returns the reserve left after the price band's fee.
    pub fn sell(&mut self, supply_in: U256, now: u64) -> CurveResult<U256> {
        let band = self.band;
        self.transact(|state, table| {
            let supply_total = state.ledger.supply_total();
            let (alpha, beta) = state.cursor.current_coefs(table)?;
            let amount = state.sell_curve(table, supply_in, now)?;
            tracing::trace!(%supply_in, %amount, "sell before fee");
            band.sell(amount, supply_total, alpha, beta)
        })
    }

    /// Buys along the curve with no fee applied.
    pub fn buy_curve(&mut self, reserve_in: U256, now: u64) -> CurveResult<U256> {
        self.transact(|state, table| state.buy_curve(table, reserve_in, now))
    }

    /// Sells along the curve with no fee applied.
    pub fn sell_curve(&mut self, supply_in: U256, now: u64) -> CurveResult<U256> {
        self.transact(|state, table| state.sell_curve(table, supply_in, now))
    }

    fn transact<F>(&mut self, trade: F) -> CurveResult<U256>
    where
        F: FnOnce(&mut CurveState, &IntervalTable) -> CurveResult<U256>,
    {
        let mut next = self.state.clone();
        let out = trade(&mut next, &self.table)?;
        self.state = next;
        Ok(out)
    }
}
