//! Time base and button sampling
//!
//! One task owns the button so the tick sample and the edge handling
//! never race for the pin. While awake it waits on whichever comes
//! first, the next tick or an edge; while asleep it waits on the edge
//! alone.
//!
//! When the tick wins the race the edge future is dropped, and an edge in
//! the gap before the next wait is armed goes unseen. The sampler compares
//! every tick's level with the last one it saw, so that edge is counted on
//! the following tick.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};
use filament_hal_rp2040::gpio::ButtonLine;
use filament_hal_rp2040::WakeButton;
use portable_atomic::Ordering;

use crate::channels::{AWAKE, SAMPLER, WAKE};

/// Input task - periodic tick and edge handler
#[embassy_executor::task]
pub async fn input_task(mut button: ButtonLine<'static>) {
    info!("Input task started");

    let rate = u64::from(SAMPLER.config().ticks_per_second);
    let mut ticker = Ticker::every(Duration::from_hz(rate));

    loop {
        if AWAKE.load(Ordering::Acquire) {
            let event = select(ticker.next(), button.wait_for_edge()).await;
            match event {
                Either::First(()) => SAMPLER.on_tick(button.is_pressed()),
                Either::Second(()) => on_edge(&mut button),
            }
        } else {
            button.wait_for_edge().await;
            on_edge(&mut button);
            // Skip the ticks missed while asleep instead of bursting them
            ticker.reset();
        }
    }
}

fn on_edge(button: &mut ButtonLine<'static>) {
    button.recharge();
    let pressed = button.is_pressed();
    SAMPLER.on_edge(pressed);
    trace!("Button edge, pressed={}", pressed);

    AWAKE.store(true, Ordering::Release);
    WAKE.signal(());
}
