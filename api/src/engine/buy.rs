use crate::curve::{get_new_n, get_val_n};
use crate::error::CurveResult;
use crate::math::{add, sub, U256};
use crate::state::IntervalTable;
use super::CurveState;

impl CurveState {
    /// Spends `reserve_in` along the curve and returns the supply it buys.
    ///
    /// Whole segments are consumed while the input covers what is left of
    /// them. The remainder is priced inside the final segment.
    pub(crate) fn buy_curve(&mut self, table: &IntervalTable, reserve_in: U256, now: u64) -> CurveResult<U256> {
        let mut remaining = reserve_in;
        let mut supply_out = U256::zero();
        let mut reserve_total = self.ledger.reserve_total();
        let mut supply_total = self.ledger.supply_total();

        let mut interval = self.cursor.current_interval(table)?;
        while remaining >= sub(interval.max_r, reserve_total)? {
            let reserve_delta = sub(interval.max_r, reserve_total)?;
            let supply_delta = sub(interval.max_n, supply_total)?;

            self.cursor.grow(table, &mut self.timers, now)?;
            interval = self.cursor.current_interval(table)?;
            reserve_total = interval.min_r;
            supply_total = interval.min_n;

            remaining = sub(remaining, reserve_delta)?;
            supply_out = add(supply_out, supply_delta)?;
            tracing::debug!(
                row = self.cursor.row(),
                col = self.cursor.col(),
                %reserve_delta,
                %supply_delta,
                "crossed segment"
            );
        }

        if !remaining.is_zero() {
            let supply_delta = if interval.is_trivial() {
                get_val_n(remaining, interval.max_n, interval.max_r)?
            } else {
                let new_reserve = add(reserve_total, remaining)?;
                let new_supply = get_new_n(new_reserve, interval.min_r, interval.min_n, interval.alpha, interval.beta)?;
                sub(new_supply, supply_total)?
            };

            reserve_total = add(reserve_total, remaining)?;
            supply_total = add(supply_total, supply_delta)?;
            supply_out = add(supply_out, supply_delta)?;
        }

        self.ledger.set_totals(reserve_total, supply_total);
        Ok(supply_out)
    }
}
