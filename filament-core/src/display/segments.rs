//! Seven-segment character words for the multiplexed VFD
//!
//! The tube is driven through a MAX6920 12-output shift register. Each
//! word selects one grid (character position) and the anodes (segments)
//! to light under it. Only one grid is ever selected at a time; a refresh
//! walks all five positions and ends on a blank word so every character
//! is lit for the same dwell.
//!
//! ```text
//!  --A--
//! |     |
//! F     B
//! |     |
//!  --G--
//! |     |
//! E     C
//! |     |
//!  --D--
//! ```

use crate::time::WallTime;

/// MAX6920 output assignments on the reference board
pub mod bits {
    /// Segment anodes
    pub const SEG_A: u8 = 10;
    pub const SEG_B: u8 = 0;
    pub const SEG_C: u8 = 4;
    pub const SEG_D: u8 = 2;
    pub const SEG_E: u8 = 8;
    pub const SEG_F: u8 = 9;
    pub const SEG_G: u8 = 7;

    /// Grid selects, left to right
    pub const GRID_HOUR_TENS: u8 = 6;
    pub const GRID_HOUR_UNITS: u8 = 5;
    pub const GRID_SEPARATOR: u8 = 3;
    pub const GRID_MINUTE_TENS: u8 = 1;
    pub const GRID_MINUTE_UNITS: u8 = 11;
}

use bits::*;

const fn mask(outputs: &[u8]) -> u16 {
    let mut word = 0u16;
    let mut i = 0;
    while i < outputs.len() {
        word |= 1 << outputs[i];
        i += 1;
    }
    word
}

/// Segment patterns for 0-9
///
/// There is deliberately no entry past 9.
pub const DIGITS: [u16; 10] = [
    mask(&[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F]),
    mask(&[SEG_B, SEG_C]),
    mask(&[SEG_A, SEG_B, SEG_G, SEG_E, SEG_D]),
    mask(&[SEG_A, SEG_B, SEG_G, SEG_C, SEG_D]),
    mask(&[SEG_F, SEG_G, SEG_B, SEG_C]),
    mask(&[SEG_A, SEG_F, SEG_G, SEG_C, SEG_D]),
    mask(&[SEG_F, SEG_G, SEG_C, SEG_D, SEG_E]),
    mask(&[SEG_A, SEG_B, SEG_C]),
    mask(&[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G]),
    mask(&[SEG_A, SEG_F, SEG_B, SEG_G, SEG_C]),
];

/// Word that lights nothing
pub const BLANK: u16 = 0;

/// Segment pattern for a decimal digit
///
/// # Panics
///
/// Panics if `digit > 9`. Callers reduce values modulo 10 first.
pub fn digit_pattern(digit: u8) -> u16 {
    DIGITS[usize::from(digit)]
}

const fn grid(position: u8) -> u16 {
    1 << position
}

/// One full refresh of the tube: five characters, then blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacterFrame {
    words: [u16; CharacterFrame::LEN],
}

impl CharacterFrame {
    /// Words per refresh, including the trailing blank
    pub const LEN: usize = 6;

    /// Build the words for `HH:MM`
    ///
    /// A leading zero hour is blanked entirely, grid included.
    pub fn compose(time: WallTime, separator_visible: bool) -> Self {
        let [hour_tens, hour_units, minute_tens, minute_units] = time.digits();

        let hour_tens_word = if hour_tens == 0 {
            BLANK
        } else {
            digit_pattern(hour_tens) | grid(GRID_HOUR_TENS)
        };
        let separator_word = if separator_visible {
            grid(GRID_SEPARATOR)
        } else {
            BLANK
        };

        Self {
            words: [
                hour_tens_word,
                digit_pattern(hour_units) | grid(GRID_HOUR_UNITS),
                separator_word,
                digit_pattern(minute_tens) | grid(GRID_MINUTE_TENS),
                digit_pattern(minute_units) | grid(GRID_MINUTE_UNITS),
                BLANK,
            ],
        }
    }

    /// A frame that lights nothing
    pub const fn blank() -> Self {
        Self {
            words: [BLANK; Self::LEN],
        }
    }

    /// Words in transmit order
    pub fn words(&self) -> &[u16; Self::LEN] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRIDS: u16 = mask(&[
        GRID_HOUR_TENS,
        GRID_HOUR_UNITS,
        GRID_SEPARATOR,
        GRID_MINUTE_TENS,
        GRID_MINUTE_UNITS,
    ]);

    fn time(h: u8, m: u8) -> WallTime {
        WallTime::new(h, m).unwrap()
    }

    #[test]
    fn test_digit_patterns_avoid_grid_outputs() {
        for pattern in DIGITS {
            assert_eq!(pattern & GRIDS, 0);
        }
    }

    #[test]
    fn test_digit_segment_counts() {
        let counts: [u32; 10] = [6, 2, 5, 5, 4, 5, 5, 3, 7, 5];
        for (digit, count) in counts.iter().enumerate() {
            assert_eq!(DIGITS[digit].count_ones(), *count, "digit {}", digit);
        }
    }

    #[test]
    fn test_leading_zero_hour_is_blank() {
        let frame = CharacterFrame::compose(time(8, 5), true);
        let words = frame.words();
        assert_eq!(words[0], BLANK);
        assert_eq!(words[1], DIGITS[8] | 1 << GRID_HOUR_UNITS);
        assert_eq!(words[2], 1 << GRID_SEPARATOR);
        assert_eq!(words[3], DIGITS[0] | 1 << GRID_MINUTE_TENS);
        assert_eq!(words[4], DIGITS[5] | 1 << GRID_MINUTE_UNITS);
        assert_eq!(words[5], BLANK);
    }

    #[test]
    fn test_two_digit_hour_and_hidden_separator() {
        let frame = CharacterFrame::compose(time(23, 47), false);
        let words = frame.words();
        assert_eq!(words[0], DIGITS[2] | 1 << GRID_HOUR_TENS);
        assert_eq!(words[2], BLANK);
    }

    #[test]
    fn test_one_grid_per_word() {
        let frame = CharacterFrame::compose(time(12, 34), true);
        for word in &frame.words()[..5] {
            assert_eq!((word & GRIDS).count_ones(), 1);
        }
        assert_eq!(frame.words()[5], BLANK);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = CharacterFrame::compose(time(9, 41), true);
        let b = CharacterFrame::compose(time(9, 41), true);
        assert_eq!(a.words(), b.words());
    }

    #[test]
    #[should_panic]
    fn test_no_pattern_past_nine() {
        let _ = digit_pattern(10);
    }
}
