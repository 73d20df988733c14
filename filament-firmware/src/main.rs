//! Filament - VFD Clock Firmware
//!
//! Main firmware binary for an RP2040 single-button clock: a MAX6920
//! multiplexed vacuum-fluorescent tube, a DS3231 RTC and one addressable
//! indicator LED.
//!
//! Two tasks share one executor. The input task is the time base and
//! button sampler; the supervisor task drives the clock and the outputs
//! and puts the board to sleep.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod channels;
mod config;
mod power;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Filament clock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = board::Board::new(p);
    info!("Board initialized");

    // Spawn tasks
    spawner.spawn(tasks::input_task(board.button)).unwrap();
    spawner
        .spawn(tasks::supervisor_task(board.supervisor))
        .unwrap();

    // Returning leaves no timer armed by this task, so the executor can
    // idle in WFE while the clock sleeps
    info!("All tasks spawned, clock running");
}
