//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in filament-core, written against the primitive I/O
//! traits of filament-hal:
//!
//! - VFD character display (MAX6920 shift register)
//! - Indicator light (WS2812-style single-wire LED)
//! - Display power rails (boost converter and filament heater)
//! - Real-time clock (DS3231)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod power;
pub mod rtc;
