//! External time source

use crate::time::RtcTime;

/// Battery-backed clock that keeps time while the CPU is halted
///
/// The clock logic treats failures as transient: a failed read keeps the
/// last known wall time and a failed write leaves the source unchanged.
pub trait TimeSource {
    /// Error type for bus or register failures
    type Error;

    /// Read hour, minute and second together
    fn now(&mut self) -> Result<RtcTime, Self::Error>;

    /// Write hour, minute and second together
    fn set(&mut self, time: RtcTime) -> Result<(), Self::Error>;
}
