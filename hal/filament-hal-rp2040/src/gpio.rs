//! GPIO wrappers

use embassy_rp::gpio::{Flex, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use filament_hal::{InputPin, OutputPin, WakeButton};

/// Cycles the internal pull-up is left on while recharging the button
/// line, about 8 µs at 125 MHz
const RECHARGE_CYCLES: u32 = 1_000;

/// Push-pull output
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    /// Configure a pin as an output at the given level
    pub fn new(pin: Peri<'d, impl Pin>, initial_high: bool) -> Self {
        let level = if initial_high { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level),
        }
    }
}

impl OutputPin for GpioOutput<'_> {
    #[inline(always)]
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    #[inline(always)]
    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Active-low wake button with an external pull-up
///
/// Kept as a `Flex` so the pull can be switched while the pin stays an
/// input.
pub struct ButtonLine<'d> {
    pin: Flex<'d>,
}

impl<'d> ButtonLine<'d> {
    /// Configure the pin as a floating input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_input();
        pin.set_pull(Pull::None);
        Self { pin }
    }

    /// Wait for the next transition in either direction
    ///
    /// Each call arms the edge detector afresh, so a transition caused
    /// by [`WakeButton::recharge`] before the call is not seen.
    pub async fn wait_for_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }
}

impl InputPin for ButtonLine<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl WakeButton for ButtonLine<'_> {
    fn recharge(&mut self) {
        self.pin.set_pull(Pull::Up);
        cortex_m::asm::delay(RECHARGE_CYCLES);
        self.pin.set_pull(Pull::None);
    }
}
