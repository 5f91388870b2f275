use crate::curve::{get_new_r_upper, get_val_r};
use crate::error::{CurveResult, StateViolation};
use crate::math::{add, sub, U256};
use crate::state::IntervalTable;
use super::CurveState;

impl CurveState {
    /// Returns `supply_in` to the curve and reports the reserve it releases.
    pub(crate) fn sell_curve(&mut self, table: &IntervalTable, supply_in: U256, now: u64) -> CurveResult<U256> {
        let mut remaining = supply_in;
        let mut reserve_out = U256::zero();
        let mut reserve_total = self.ledger.reserve_total();
        let mut supply_total = self.ledger.supply_total();

        if supply_in > supply_total {
            return Err(StateViolation::SupplyUnderflow { amount: supply_in, supply: supply_total }.into());
        }

        let mut interval = self.cursor.current_interval(table)?;
        while remaining > sub(supply_total, interval.min_n)? {
            let supply_delta = sub(supply_total, interval.min_n)?;
            let reserve_delta = sub(reserve_total, interval.min_r)?;

            self.cursor.shrink(table, &mut self.timers, now)?;
            interval = self.cursor.current_interval(table)?;
            supply_total = interval.max_n;
            reserve_total = interval.max_r;

            remaining = sub(remaining, supply_delta)?;
            reserve_out = add(reserve_out, reserve_delta)?;
            tracing::debug!(
                row = self.cursor.row(),
                col = self.cursor.col(),
                %reserve_delta,
                %supply_delta,
                "retreated segment"
            );
        }

        if !remaining.is_zero() {
            let reserve_delta = if interval.is_trivial() {
                get_val_r(remaining, interval.max_r, interval.max_n)?
            } else {
                // settle at or above the curve so rounding never pays out extra
                let new_supply = sub(supply_total, remaining)?;
                let new_reserve = get_new_r_upper(new_supply, interval.min_n, interval.min_r, interval.alpha, interval.beta)?;
                reserve_total.saturating_sub(new_reserve)
            };

            supply_total = sub(supply_total, remaining)?;
            reserve_total = sub(reserve_total, reserve_delta)?;
            reserve_out = add(reserve_out, reserve_delta)?;
        }

        self.ledger.set_totals(reserve_total, supply_total);
        Ok(reserve_out)
    }
}
