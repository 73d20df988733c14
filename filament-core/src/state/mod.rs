//! Time-setting state machine
//!
//! Three states, one button. The transition function is pure: it takes
//! the current state, a snapshot of the input counters and the wall time,
//! and returns the next state plus the side effects the supervisor must
//! apply. Interrupt context never touches anything here.

pub mod actions;
pub mod events;
pub mod machine;

pub use actions::{Action, Actions};
pub use events::Inputs;
pub use machine::{ClockMachine, EditState, Transition};
