//! Cycle-counted busy waits on the Cortex-M0+

use filament_hal::CycleDelay;

/// Spins with `cortex_m::asm::delay`
///
/// The loop never touches interrupt state, so it is safe inside the LED
/// driver's critical section.
#[derive(Debug, Clone, Copy)]
pub struct CortexCycles {
    cpu_hz: u32,
}

impl CortexCycles {
    /// Use the current system clock frequency
    pub fn new() -> Self {
        Self {
            cpu_hz: embassy_rp::clocks::clk_sys_freq(),
        }
    }
}

impl Default for CortexCycles {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDelay for CortexCycles {
    fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        if cycles > 0 {
            cortex_m::asm::delay(cycles);
        }
    }
}
