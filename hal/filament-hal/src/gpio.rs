//! GPIO pin abstractions
//!
//! Digital lines used by the clock: rail enables, the MAX6920 LOAD strobe,
//! the single-wire LED data line and the wake button.

/// Digital output pin
///
/// Implementations write the hardware register directly; the single-wire
/// LED driver relies on `set_high`/`set_low` being a fixed, short number
/// of cycles.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// The wake button line
///
/// The button is wired active-low against a weak external pull-up. The
/// edge handler briefly enables the internal pull-up to charge the line
/// before returning it to the externally pulled-up state.
pub trait WakeButton: InputPin {
    /// Check if the button is held down
    fn is_pressed(&self) -> bool {
        self.is_low()
    }

    /// Charge the line through the internal pull-up, then release it
    fn recharge(&mut self);
}
