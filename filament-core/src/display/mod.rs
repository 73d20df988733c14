//! Display encodings
//!
//! Pure transformations from clock values to what goes on the wire:
//! segment words for the VFD and pulse trains for the indicator LED.
//! Nothing here touches hardware.

pub mod color;
pub mod segments;
pub mod single_wire;

pub use color::{Color12, FadeAnimation};
pub use segments::CharacterFrame;
pub use single_wire::{pulse_train, CycleTiming, Pulse, PulseTrain, WIRE_BITS};
