//! Tick task for time-based updates
//!
//! Provides periodic ticks to the controller for:
//! - Resync due-checks
//! - Minute rollover on the date/time screen

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Signal to notify controller of tick, payload is uptime seconds
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends periodic tick signals with uptime
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let uptime_secs = start.elapsed().as_secs() as u32;
        TICK_SIGNAL.signal(uptime_secs);
    }
}
