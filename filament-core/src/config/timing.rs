//! Peripheral timing contracts
//!
//! None of the attached peripherals have a handshake; each is driven
//! purely by pulse timing. The numbers live here so the drivers and
//! their tests agree on one set.

/// Single-wire addressable LED waveform
///
/// Every bit cell starts high. A zero holds high for `zero_high_ns`, a one
/// for `one_high_ns`; the cell is then low for the rest of
/// `bit_period_ns`. The receiver latches after the line has been low for
/// `reset_ns`. WS2812B parts discriminate bits with roughly ±150 ns of
/// tolerance on each high time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SingleWireTiming {
    /// High time of a zero bit
    pub zero_high_ns: u32,
    /// High time of a one bit
    pub one_high_ns: u32,
    /// Full bit cell
    pub bit_period_ns: u32,
    /// Low time that latches the shifted color
    pub reset_ns: u32,
}

impl SingleWireTiming {
    /// WS2812B at 800 kHz
    ///
    /// The 300 µs reset covers newer parts that ignore the older 50 µs gap.
    pub const WS2812B: Self = Self {
        zero_high_ns: 400,
        one_high_ns: 800,
        bit_period_ns: 1250,
        reset_ns: 300_000,
    };

    /// Bit tolerance on each high time
    pub const TOLERANCE_NS: u32 = 150;
}

impl Default for SingleWireTiming {
    fn default() -> Self {
        Self::WS2812B
    }
}

/// MAX6920 shift-and-load timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftTiming {
    /// Width of the LOAD strobe that moves shifted bits to the outputs
    pub load_pulse_us: u32,
    /// How long each character stays lit before the next one is shifted
    pub dwell_us: u32,
}

impl ShiftTiming {
    /// Timing used on the reference board
    pub const MAX6920: Self = Self {
        load_pulse_us: 2,
        dwell_us: 10,
    };
}

impl Default for ShiftTiming {
    fn default() -> Self {
        Self::MAX6920
    }
}

/// Display supply timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailTiming {
    /// Wait after switching the boost converter on before driving the grid
    pub settle_us: u32,
}

impl RailTiming {
    /// Boost converter settle time on the reference board
    pub const VFD_BOOST: Self = Self { settle_us: 500 };
}

impl Default for RailTiming {
    fn default() -> Self {
        Self::VFD_BOOST
    }
}
