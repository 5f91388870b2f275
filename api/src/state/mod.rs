mod interval;
mod ledger;
mod timers;
mod cursor;

pub use interval::*;
pub use ledger::*;
pub use timers::*;
pub use cursor::*;
