//! Supervisor task
//!
//! Runs the clock loop back to back, yielding to the input task between
//! passes. The tube is multiplexed, so it only stays lit while this loop
//! keeps refreshing it.

use defmt::*;
use embassy_futures::yield_now;

use crate::board::ClockSupervisor;
use crate::channels::SAMPLER;
use crate::power::enter_low_power;

/// Supervisor task - main clock loop
#[embassy_executor::task]
pub async fn supervisor_task(mut supervisor: ClockSupervisor) {
    info!("Supervisor task started");

    if let Some(fault) = supervisor.boot(&SAMPLER) {
        warn!("Time source fault at boot: {}", fault);
    }
    info!("Boot complete, showing {}", supervisor.time());

    let mut dropped = 0;
    loop {
        let report = supervisor.iterate(&SAMPLER);

        if report.changed {
            debug!("Clock state -> {}", report.state);
        }
        if let Some(time) = report.committed {
            info!("Time set to {}", time);
        }
        if let Some(fault) = report.fault {
            warn!("Time source fault: {}", fault);
        }

        let now_dropped = supervisor.display().dropped_words();
        if now_dropped != dropped {
            warn!(
                "VFD link dropped {} words ({} total)",
                now_dropped.wrapping_sub(dropped),
                now_dropped
            );
            dropped = now_dropped;
        }

        if report.sleep_due {
            enter_low_power(&mut supervisor).await;
        }

        yield_now().await;
    }
}
