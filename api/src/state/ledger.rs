use crate::math::U256;

/// Running reserve and supply totals. Only the engine's trade paths write it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    reserve_total: U256,
    supply_total: U256,
}

impl Ledger {
    pub fn reserve_total(&self) -> U256 {
        self.reserve_total
    }

    pub fn supply_total(&self) -> U256 {
        self.supply_total
    }

    pub(crate) fn set_totals(&mut self, reserve_total: U256, supply_total: U256) {
        self.reserve_total = reserve_total;
        self.supply_total = supply_total;
    }
}
