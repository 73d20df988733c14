//! Low-power sequencing

use defmt::*;
use portable_atomic::Ordering;

use crate::board::ClockSupervisor;
use crate::channels::{AWAKE, SAMPLER, WAKE};

/// Sleep until the button is touched
///
/// Darkens the indicator, drops the tube's rails and stops the tick.
/// With no timer armed the executor idles in WFE until the GPIO edge
/// interrupt fires. On wake the time is re-read before the tube comes
/// back.
pub async fn enter_low_power(supervisor: &mut ClockSupervisor) {
    supervisor.suspend();

    // No await separates these from the input task's next check
    WAKE.reset();
    AWAKE.store(false, Ordering::Release);
    info!("Sleeping until the button is pressed");

    WAKE.wait().await;

    if let Some(fault) = supervisor.resume(&SAMPLER) {
        warn!("Time source fault on wake: {}", fault);
    }
    info!("Awake at {}", supervisor.time());
}
