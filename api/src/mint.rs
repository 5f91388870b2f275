use std::sync::Arc;
use crate::error::CurveResult;
use crate::math::U256;
use crate::state::{EpochTimers, IntervalTable};

/// Receives the supply released to holders when an epoch matures.
pub trait MintListener {
    fn mint_supply_for_holders(&mut self, amount: U256) -> CurveResult<()>;
}

/// Releases each epoch's mint amount once the following row's timer expires.
pub struct MintScheduler<L: MintListener> {
    table: Arc<IntervalTable>,
    listener: L,
    index: usize,
}

impl<L: MintListener> MintScheduler<L> {
    pub fn new(table: Arc<IntervalTable>, listener: L) -> Self {
        Self {
            table,
            listener,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn is_minting_state_outdated(&self, timers: &EpochTimers, now: u64) -> bool {
        self.index + 1 < self.table.rows() && timers.expired(self.index + 1, now)
    }

    /// Mints at most one epoch. Returns the minted amount, if any.
    pub fn update_minting_state(&mut self, timers: &EpochTimers, now: u64) -> CurveResult<Option<U256>> {
        if !self.is_minting_state_outdated(timers, now) {
            tracing::trace!(index = self.index, now, "minting state is current");
            return Ok(None);
        }

        let amount = self.table.required_mint_amount(self.index)?;
        self.listener.mint_supply_for_holders(amount)?;
        self.index += 1;

        tracing::debug!(index = self.index, %amount, "minted supply for holders");
        Ok(Some(amount))
    }
}
