//! Wall time
//!
//! The clock shows hours and minutes only. Seconds exist solely on the
//! RTC side of the exchange and are zeroed whenever the clock commits an
//! edited time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hours in a day
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// An hour/minute pair, always valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a wall time, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < HOURS_PER_DAY && minute < MINUTES_PER_HOUR {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Hour, 0-23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0-59
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Advance the hour, wrapping 23 to 0
    ///
    /// Minutes are untouched; editing never carries between fields.
    pub fn increment_hour(&mut self) {
        self.hour = (self.hour + 1) % HOURS_PER_DAY;
    }

    /// Advance the minute, wrapping 59 to 0
    pub fn increment_minute(&mut self) {
        self.minute = (self.minute + 1) % MINUTES_PER_HOUR;
    }

    /// Decimal digits: hour tens, hour units, minute tens, minute units
    pub const fn digits(&self) -> [u8; 4] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
        ]
    }
}

/// Time as exchanged with the RTC chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcTime {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl RtcTime {
    /// Time to write when committing an edit
    pub const fn from_wall(wall: WallTime) -> Self {
        Self {
            hour: wall.hour,
            minute: wall.minute,
            second: 0,
        }
    }

    /// Drop the seconds
    ///
    /// Returns `None` if the RTC handed back an impossible hour or minute.
    pub const fn wall(&self) -> Option<WallTime> {
        WallTime::new(self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(WallTime::new(24, 0).is_none());
        assert!(WallTime::new(0, 60).is_none());
        assert!(WallTime::new(23, 59).is_some());
    }

    #[test]
    fn test_hour_wraps_at_midnight() {
        let mut t = WallTime::new(23, 59).unwrap();
        t.increment_hour();
        assert_eq!(t, WallTime::new(0, 59).unwrap());
    }

    #[test]
    fn test_minute_does_not_carry() {
        let mut t = WallTime::new(8, 59).unwrap();
        t.increment_minute();
        assert_eq!(t, WallTime::new(8, 0).unwrap());
    }

    #[test]
    fn test_digits() {
        assert_eq!(WallTime::new(8, 5).unwrap().digits(), [0, 8, 0, 5]);
        assert_eq!(WallTime::new(23, 47).unwrap().digits(), [2, 3, 4, 7]);
    }

    #[test]
    fn test_commit_zeroes_seconds() {
        let rtc = RtcTime::from_wall(WallTime::new(12, 34).unwrap());
        assert_eq!(
            rtc,
            RtcTime {
                hour: 12,
                minute: 34,
                second: 0
            }
        );
        assert_eq!(rtc.wall(), WallTime::new(12, 34));
    }

    proptest! {
        #[test]
        fn prop_hour_increment_is_modular(h in 0u8..24, m in 0u8..60) {
            let mut t = WallTime::new(h, m).unwrap();
            t.increment_hour();
            prop_assert_eq!(t.hour(), (h + 1) % 24);
            prop_assert_eq!(t.minute(), m);
        }

        #[test]
        fn prop_minute_increment_is_modular(h in 0u8..24, m in 0u8..60) {
            let mut t = WallTime::new(h, m).unwrap();
            t.increment_minute();
            prop_assert_eq!(t.minute(), (m + 1) % 60);
            prop_assert_eq!(t.hour(), h);
        }

        #[test]
        fn prop_digits_are_decimal(h in 0u8..24, m in 0u8..60) {
            let d = WallTime::new(h, m).unwrap().digits();
            prop_assert!(d.iter().all(|&x| x <= 9));
            prop_assert_eq!(d[0] * 10 + d[1], h);
            prop_assert_eq!(d[2] * 10 + d[3], m);
        }
    }
}
