//! State shared between the input and supervisor tasks
//!
//! The counters travel through the sampler's critical sections; the two
//! flags below only coordinate sleep and wake.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use filament_core::sampler::SharedSampler;
use portable_atomic::AtomicBool;

use crate::config::CLOCK_CONFIG;

/// Tick and button counters
pub static SAMPLER: SharedSampler = SharedSampler::new(CLOCK_CONFIG);

/// Raised by the input task on every button edge
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// False while the clock sleeps; the input task stops ticking
pub static AWAKE: AtomicBool = AtomicBool::new(true);
