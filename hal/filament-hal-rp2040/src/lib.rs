//! RP2040-specific HAL for the VFD clock firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `filament-hal` traits on top of `embassy-rp`:
//!
//! - GPIO outputs and the wake button line
//! - Blocking SPI as the MAX6920 byte transport
//! - Blocking I2C for the RTC
//! - Cycle-counted busy waits on the Cortex-M0+ core

#![no_std]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export shared traits from filament-hal for convenience
pub use filament_hal::{ByteTransport, CycleDelay, I2cBus, InputPin, OutputPin, WakeButton};
