//! Filament Hardware Abstraction Layer
//!
//! This crate defines the primitive I/O traits the clock's drivers are
//! written against. Chip-specific crates implement them; host tests
//! implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  filament-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  filament-drivers (MAX6920, WS2812, ..) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  filament-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  filament-hal-rp2040                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::WakeButton`] - Digital I/O
//! - [`spi::ByteTransport`] - Byte-serial shift link
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`delay::CycleDelay`] - CPU-cycle busy waits for hand-timed waveforms

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::CycleDelay;
pub use gpio::{InputPin, OutputPin, WakeButton};
pub use i2c::I2cBus;
pub use spi::ByteTransport;
