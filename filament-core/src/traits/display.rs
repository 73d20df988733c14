//! Output traits

use crate::display::{CharacterFrame, Color12};

/// Multiplexed character display
///
/// One call is one full refresh. Writes are fire-and-forget; a driver
/// has no failure the clock could act on.
pub trait CharacterDisplay {
    /// Shift out every word of the frame in order
    fn show(&mut self, frame: &CharacterFrame);
}

/// Single addressable indicator light
pub trait Indicator {
    /// Latch a new color
    fn set_color(&mut self, color: Color12);
}
