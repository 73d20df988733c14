//! Cycle-counted delays
//!
//! Microsecond waits go through `embedded_hal::delay::DelayNs`. The
//! single-wire LED protocol needs finer control: its pulse widths are
//! expressed in CPU cycles so they can be computed once from the core
//! clock and replayed without arithmetic inside the timed loop.

/// Busy-wait measured in CPU cycles
pub trait CycleDelay {
    /// Core clock frequency in Hz
    fn cpu_hz(&self) -> u32;

    /// Spin for at least `cycles` CPU cycles
    ///
    /// Must not touch interrupts; callers may already be inside a
    /// critical section.
    fn delay_cycles(&mut self, cycles: u32);
}
