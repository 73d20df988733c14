//! Power rail drivers

pub mod rails;

pub use rails::VfdRails;
