pub mod consts;
pub mod error;
pub mod math;
pub mod curve;
pub mod state;
pub mod engine;
pub mod mint;
pub mod band;
pub mod config;
pub mod utils;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::math::*;
    pub use crate::curve::*;
    pub use crate::state::*;
    pub use crate::engine::*;
    pub use crate::mint::*;
    pub use crate::band::*;
    pub use crate::config::*;
    pub use crate::utils::*;
}
