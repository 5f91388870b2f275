#![cfg(test)]
#![allow(dead_code)]
use std::path::PathBuf;
use epochcurve_api::prelude::*;

pub const TIMEOUT: u64 = 86_400;

pub fn demo_config() -> CurveConfig {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../curves/demo.json");
    CurveConfig::load(path).unwrap()
}

pub fn setup_engine() -> CurveEngine {
    demo_config().build_engine().unwrap()
}

pub fn dec(value: &str) -> U256 {
    U256::from_dec_str(value).unwrap()
}

/// Collects every mint the scheduler releases.
#[derive(Default)]
pub struct Holders {
    pub minted: Vec<U256>,
}

impl MintListener for Holders {
    fn mint_supply_for_holders(&mut self, amount: U256) -> CurveResult<()> {
        self.minted.push(amount);
        Ok(())
    }
}
