mod curve;
mod print;

pub use curve::*;
pub use print::*;
