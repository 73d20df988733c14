//! Collaborator traits
//!
//! These traits define the interface between the clock logic and the
//! drivers behind it.

pub mod display;
pub mod power;
pub mod time;

pub use display::{CharacterDisplay, Indicator};
pub use power::PowerRails;
pub use time::TimeSource;
