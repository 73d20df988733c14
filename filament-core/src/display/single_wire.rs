//! Single-wire addressable LED encoding
//!
//! A color becomes 24 bit cells, most significant bit first, followed by
//! a low reset gap. Zeros and ones differ only in how long the cell stays
//! high; the gap is the same for every color. The train is described here
//! in nanoseconds and converted to CPU cycles once per core clock, so the
//! bit-banging driver does no arithmetic while interrupts are off.

use crate::config::SingleWireTiming;
use crate::display::Color12;

/// Bit cells per color
pub const WIRE_BITS: u8 = 24;

/// One element of the output waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pulse {
    /// A bit cell: high, then low
    Bit { high_ns: u32, low_ns: u32 },
    /// Line held low to latch the color
    Reset { low_ns: u32 },
}

/// Waveform for one color
#[derive(Debug, Clone)]
pub struct PulseTrain {
    bits: u32,
    remaining: u8,
    timing: SingleWireTiming,
    finished: bool,
}

/// Describe the waveform that sends `color`
pub fn pulse_train(color: Color12, timing: SingleWireTiming) -> PulseTrain {
    PulseTrain {
        bits: color.wire_bits(),
        remaining: WIRE_BITS,
        timing,
        finished: false,
    }
}

impl Iterator for PulseTrain {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        if self.remaining > 0 {
            self.remaining -= 1;
            let one = self.bits & (1 << self.remaining) != 0;
            let high_ns = if one {
                self.timing.one_high_ns
            } else {
                self.timing.zero_high_ns
            };
            return Some(Pulse::Bit {
                high_ns,
                low_ns: self.timing.bit_period_ns.saturating_sub(high_ns),
            });
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(Pulse::Reset {
            low_ns: self.timing.reset_ns,
        })
    }
}

/// The waveform in CPU cycles
///
/// `overhead_cycles` is what one pin write plus loop bookkeeping costs on
/// the target; it is subtracted from every phase so the measured widths
/// land on the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleTiming {
    /// Spin after raising the line for a zero
    pub zero_high: u32,
    /// Spin after lowering the line for a zero
    pub zero_low: u32,
    /// Spin after raising the line for a one
    pub one_high: u32,
    /// Spin after lowering the line for a one
    pub one_low: u32,
    /// Latch gap
    pub reset: u32,
}

/// Nanoseconds to cycles, rounded up
fn ns_to_cycles(ns: u32, cpu_hz: u32) -> u32 {
    let cycles = (u64::from(ns) * u64::from(cpu_hz)).div_ceil(1_000_000_000);
    u32::try_from(cycles).unwrap_or(u32::MAX)
}

impl CycleTiming {
    /// Convert a timing contract for a core running at `cpu_hz`
    pub fn from_ns(timing: &SingleWireTiming, cpu_hz: u32, overhead_cycles: u32) -> Self {
        let period = ns_to_cycles(timing.bit_period_ns, cpu_hz);
        let zero_high = ns_to_cycles(timing.zero_high_ns, cpu_hz);
        let one_high = ns_to_cycles(timing.one_high_ns, cpu_hz);

        Self {
            zero_high: zero_high.saturating_sub(overhead_cycles),
            zero_low: period
                .saturating_sub(zero_high)
                .saturating_sub(overhead_cycles),
            one_high: one_high.saturating_sub(overhead_cycles),
            one_low: period
                .saturating_sub(one_high)
                .saturating_sub(overhead_cycles),
            reset: ns_to_cycles(timing.reset_ns, cpu_hz),
        }
    }

    /// High and low spin for one bit cell
    #[inline(always)]
    pub fn cell(&self, one: bool) -> (u32, u32) {
        if one {
            (self.one_high, self.one_low)
        } else {
            (self.zero_high, self.zero_low)
        }
    }
}
