//! Configuration types
//!
//! Tunables are compiled in from `clock.toml`; timing contracts are fixed
//! by the attached peripherals.

pub mod timing;
pub mod types;

pub use timing::*;
pub use types::*;
