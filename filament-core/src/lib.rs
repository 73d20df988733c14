//! Board-agnostic core logic for the VFD clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration and timing contracts
//! - Wall time arithmetic
//! - The tick & input sampler shared with interrupt context
//! - The time-setting state machine
//! - Display encodings (segment frames, single-wire pulse trains, fades)
//! - Collaborator traits and the supervisor loop body

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod sampler;
pub mod state;
pub mod supervisor;
pub mod time;
pub mod traits;
