//! Display supply control

/// Boost and heater supplies of the display
pub trait PowerRails {
    /// Switch both supplies on and return once they are safe to drive
    fn enable(&mut self);

    /// Switch both supplies off immediately
    fn disable(&mut self);

    /// Check if the supplies are on
    fn is_enabled(&self) -> bool;
}
