//! Inputs consumed by one state machine step

use crate::config::ClockConfig;
use crate::sampler::Snapshot;

/// What the state machine sees each supervisor iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Consecutive ticks the button has been held
    pub press_ticks: u8,
    /// Ticks left before sleep
    pub budget: u16,
    /// Wall time is due for re-reading
    pub stale: bool,
}

impl Inputs {
    /// Button held past the hold that starts editing
    pub fn long_press(&self, config: &ClockConfig) -> bool {
        self.press_ticks > config.long_press_ticks
    }

    /// Button held past the hold that increments a value
    pub fn short_press(&self, config: &ClockConfig) -> bool {
        self.press_ticks > config.short_press_ticks
    }
}

impl From<Snapshot> for Inputs {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            press_ticks: snapshot.press_ticks,
            budget: snapshot.budget,
            stale: snapshot.stale,
        }
    }
}
