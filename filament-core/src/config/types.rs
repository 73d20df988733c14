//! Clock configuration
//!
//! Tick rate and press thresholds changed between hardware revisions
//! (10, 20 and 30 Hz ticks have all shipped), so every count here is a
//! configuration value rather than a constant baked into the logic.

use crate::display::Color12;
use crate::time::WallTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicator colors for each clock mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct IndicatorPalette {
    /// Normal time display
    pub clock: Color12,
    /// Editing hours
    pub set_hours: Color12,
    /// Editing minutes
    pub set_minutes: Color12,
    /// Indicator dark (asleep)
    pub off: Color12,
}

impl IndicatorPalette {
    /// Red with a hint of purple, green for hours, blue for minutes
    pub const DEFAULT: Self = Self {
        clock: Color12::from_packed(0x8F0),
        set_hours: Color12::from_packed(0x00F),
        set_minutes: Color12::from_packed(0xF00),
        off: Color12::BLACK,
    };
}

impl Default for IndicatorPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clock behaviour configuration
///
/// All durations are in ticks of the periodic time base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ClockConfig {
    /// Tick counter modulus; one wrap is one second
    pub ticks_per_second: u8,
    /// Hold time that enters hour editing from the time display
    pub long_press_ticks: u8,
    /// Hold time that increments the value being edited
    pub short_press_ticks: u8,
    /// Press duration saturates here
    pub press_ceiling: u8,
    /// Inactivity before the display sleeps
    pub sleep_timeout_ticks: u16,
    /// Length of the indicator's black-to-clock fade
    pub fade_steps: u8,
    /// Time written to the RTC at power-on, if any
    pub seed_time: Option<WallTime>,
    /// Indicator colors
    pub palette: IndicatorPalette,
}

impl ClockConfig {
    /// 20 Hz tick, 2.0 s long press, 0.5 s short press, 11 s sleep timeout
    pub const DEFAULT: Self = Self {
        ticks_per_second: 20,
        long_press_ticks: 40,
        short_press_ticks: 10,
        press_ceiling: u8::MAX,
        sleep_timeout_ticks: 220,
        fade_steps: 16,
        seed_time: WallTime::new(8, 0),
        palette: IndicatorPalette::DEFAULT,
    };

    /// Check the relationships between thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second < 2 {
            return Err(ConfigError::TickRateTooLow);
        }
        if self.short_press_ticks == 0 {
            return Err(ConfigError::ShortPressZero);
        }
        if self.short_press_ticks >= self.long_press_ticks {
            return Err(ConfigError::ShortPressNotBelowLongPress);
        }
        if self.long_press_ticks >= self.press_ceiling {
            return Err(ConfigError::LongPressAtCeiling);
        }
        if u16::from(self.long_press_ticks) >= self.sleep_timeout_ticks {
            return Err(ConfigError::LongPressNotBelowTimeout);
        }
        if self.fade_steps == 0 {
            return Err(ConfigError::FadeStepsZero);
        }
        if let Some(seed) = self.seed_time {
            if WallTime::new(seed.hour(), seed.minute()).is_none() {
                return Err(ConfigError::SeedTimeOutOfRange);
            }
        }
        Ok(())
    }

    /// Budget below which an editing state advances on its own
    ///
    /// Reached after `long_press_ticks` without any input.
    pub fn edit_advance_below(&self) -> u16 {
        self.sleep_timeout_ticks
            .saturating_sub(u16::from(self.long_press_ticks))
    }

    /// Tick phase at which the separator lights within each second
    pub fn separator_phase(&self) -> u8 {
        self.ticks_per_second / 2
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration rule violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fewer than two ticks per second leaves no blink phase
    TickRateTooLow,
    /// A zero short press would fire on every tick
    ShortPressZero,
    /// Short press must be strictly shorter than long press
    ShortPressNotBelowLongPress,
    /// Long press must be reachable below the saturation ceiling
    LongPressAtCeiling,
    /// Long press must be shorter than the sleep timeout
    LongPressNotBelowTimeout,
    /// Fade needs at least one step
    FadeStepsZero,
    /// Seed time is not a valid 24-hour time
    SeedTimeOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::TickRateTooLow => "ticks_per_second must be at least 2",
            ConfigError::ShortPressZero => "short_press_ticks must be non-zero",
            ConfigError::ShortPressNotBelowLongPress => {
                "short_press_ticks must be less than long_press_ticks"
            }
            ConfigError::LongPressAtCeiling => "long_press_ticks must be less than press_ceiling",
            ConfigError::LongPressNotBelowTimeout => {
                "long_press_ticks must be less than sleep_timeout_ticks"
            }
            ConfigError::FadeStepsZero => "fade_steps must be non-zero",
            ConfigError::SeedTimeOutOfRange => "seed_time must be a valid 24-hour time",
        };
        f.write_str(msg)
    }
}
