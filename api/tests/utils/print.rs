#![cfg(test)]
#![allow(dead_code)]
use epochcurve_api::prelude::*;

pub fn print_state(label: &str, engine: &CurveEngine) {
    let (row, col) = engine.cursor().position();
    println!("--------------------------------------------------------------------------------");
    println!("{}", label);
    println!("cursor:\t({}, {})", row, col);
    println!("reserve:\t{}", format_amount(engine.ledger().reserve_total()));
    println!("supply:\t{}", format_amount(engine.ledger().supply_total()));
    for id in 0..engine.table().rows() {
        if let Some(start) = engine.timers().started_at(id) {
            println!("timer {}:\tstarted at {}", id, start);
        }
    }
}
