//! Character display drivers

pub mod max6920;

pub use max6920::Max6920;
