//! Indicator colors
//!
//! Colors are packed as three 4-bit channels, `0xBRG`: blue in the top
//! nibble, then red, then green. 4096 colors are plenty for a status
//! light and keep every palette entry a short literal.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 12-bit color, packed `0xBRG`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Color12(u16);

impl Color12 {
    /// Indicator off
    pub const BLACK: Self = Self(0);

    /// Wrap a packed `0xBRG` value; bits above the twelfth are dropped
    pub const fn from_packed(packed: u16) -> Self {
        Self(packed & 0x0FFF)
    }

    /// Build from individual 4-bit channels
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(((blue as u16 & 0xF) << 8) | ((red as u16 & 0xF) << 4) | (green as u16 & 0xF))
    }

    /// The packed `0xBRG` value
    pub const fn packed(self) -> u16 {
        self.0
    }

    /// Red channel, 0-15
    pub const fn red(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// Green channel, 0-15
    pub const fn green(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Blue channel, 0-15
    pub const fn blue(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// Scale every channel by `num / den`
    ///
    /// `num` is clamped to `den`; a zero `den` yields black.
    pub fn scaled(self, num: u8, den: u8) -> Self {
        if den == 0 {
            return Self::BLACK;
        }
        let num = u16::from(num.min(den));
        let den = u16::from(den);
        let scale = |channel: u8| (u16::from(channel) * num / den) as u8;
        Self::from_channels(scale(self.red()), scale(self.green()), scale(self.blue()))
    }

    /// The 24 bits sent on the wire, right-aligned in a `u32`
    ///
    /// The receiver expects green, red, blue, eight bits each, MSB first.
    /// Each channel goes out from its lowest bit up and every bit is sent
    /// twice, so `0x1` becomes `0xC0` (bright) and `0x8` becomes `0x03`.
    pub const fn wire_bits(self) -> u32 {
        (widen(self.green()) as u32) << 16 | (widen(self.red()) as u32) << 8 | widen(self.blue()) as u32
    }
}

/// Mirror a nibble and double every bit: `b3 b2 b1 b0` -> `b0 b0 b1 b1 b2 b2 b3 b3`
const fn widen(nibble: u8) -> u8 {
    let mut out = 0u8;
    let mut bit = 0;
    while bit < 4 {
        if nibble & (1 << bit) != 0 {
            out |= 0b11 << (6 - 2 * bit);
        }
        bit += 1;
    }
    out
}

/// Black-to-target fade, one step per tick
///
/// Runs after power-on and after every wake. A color set by the state
/// machine cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeAnimation {
    target: Color12,
    steps: u8,
    step: u8,
    running: bool,
}

impl FadeAnimation {
    /// An idle fade of the given length
    pub const fn new(steps: u8) -> Self {
        Self {
            target: Color12::BLACK,
            steps,
            step: 0,
            running: false,
        }
    }

    /// Start again from black
    pub fn restart(&mut self, target: Color12) {
        self.target = target;
        self.step = 0;
        self.running = true;
    }

    /// Stop without emitting further colors
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Check if the fade still has steps to emit
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Next color of the fade, or `None` once finished
    ///
    /// The final step is exactly the target color.
    pub fn step(&mut self) -> Option<Color12> {
        if !self.running {
            return None;
        }
        self.step = self.step.saturating_add(1);
        if self.step >= self.steps {
            self.running = false;
        }
        Some(self.target.scaled(self.step, self.steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        let c = Color12::from_packed(0x8F0);
        assert_eq!(c.blue(), 0x8);
        assert_eq!(c.red(), 0xF);
        assert_eq!(c.green(), 0x0);
        assert_eq!(Color12::from_channels(0xF, 0x0, 0x8), c);
    }

    #[test]
    fn test_packed_masks_high_bits() {
        assert_eq!(Color12::from_packed(0xF123).packed(), 0x123);
    }

    #[test]
    fn test_wire_order_is_grb_with_doubled_bits() {
        // Green only
        assert_eq!(Color12::from_packed(0x00F).wire_bits(), 0xFF_00_00);
        // Blue only
        assert_eq!(Color12::from_packed(0xF00).wire_bits(), 0x00_00_FF);
        // Red 0x8 -> 0x03, blue 0x1 -> 0xC0
        assert_eq!(Color12::from_packed(0x180).wire_bits(), 0x00_03_C0);
        assert_eq!(Color12::BLACK.wire_bits(), 0);
    }

    #[test]
    fn test_low_channel_bit_is_brightest() {
        assert_eq!(Color12::from_packed(0x001).wire_bits(), 0xC0_00_00);
        assert_eq!(Color12::from_packed(0x008).wire_bits(), 0x03_00_00);
        assert_eq!(Color12::from_packed(0x00A).wire_bits(), 0x33_00_00);
        // Clock color: full red, a touch of blue
        assert_eq!(Color12::from_packed(0x8F0).wire_bits(), 0x00_FF_03);
    }

    #[test]
    fn test_scaled() {
        let c = Color12::from_packed(0x8F0);
        assert_eq!(c.scaled(0, 16), Color12::BLACK);
        assert_eq!(c.scaled(16, 16), c);
        assert_eq!(c.scaled(8, 16), Color12::from_channels(7, 0, 4));
        assert_eq!(c.scaled(1, 0), Color12::BLACK);
    }

    #[test]
    fn test_fade_ends_on_target() {
        let target = Color12::from_packed(0x8F0);
        let mut fade = FadeAnimation::new(4);
        assert_eq!(fade.step(), None);

        fade.restart(target);
        let mut last = Color12::BLACK;
        let mut count = 0;
        while let Some(c) = fade.step() {
            assert!(c.red() >= last.red());
            last = c;
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(last, target);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_fade_cancel() {
        let mut fade = FadeAnimation::new(16);
        fade.restart(Color12::from_packed(0xFFF));
        assert!(fade.step().is_some());
        fade.cancel();
        assert_eq!(fade.step(), None);
    }
}
