//! Side effects requested by a transition

use crate::display::Color12;
use crate::time::WallTime;

/// Most actions a single step can produce
pub const MAX_ACTIONS: usize = 4;

/// One side effect for the supervisor to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A user action was consumed; reset press duration and budget
    ResetCounters,
    /// Switch the indicator to a mode color
    SetIndicator(Color12),
    /// Write the edited time to the time source
    Commit(WallTime),
    /// Re-read wall time from the time source and clear the stale flag
    Resync,
}

/// Actions in the order they must be applied
pub type Actions = heapless::Vec<Action, MAX_ACTIONS>;
