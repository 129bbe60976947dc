//! Time sync task
//!
//! Services sync requests from the controller: one SNTP exchange per
//! request, stepping the system clock on success. The controller owns
//! the schedule and decides *when*; this task only does the work and
//! reports back.

use defmt::*;
use embassy_net::Stack;
use embassy_time::Duration;

use crate::channels::{SyncOutcome, SYNC_OUTCOME, SYNC_REQUEST};
use crate::clock::SYSTEM_CLOCK;
use crate::config::DeviceConfig;
use crate::net::sntp;

/// Per-exchange timeout (DNS excluded; that has the stack's own)
const SNTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Sync task - performs one SNTP exchange per request
#[embassy_executor::task]
pub async fn sync_task(stack: Stack<'static>, config: &'static DeviceConfig) {
    info!("Sync task started, server {}", config.ntp.server.as_str());

    loop {
        SYNC_REQUEST.wait().await;

        match sntp::query(stack, &config.ntp.server, SNTP_TIMEOUT).await {
            Ok(instant) => {
                // Set the clock first so the outcome's observers read
                // the new time
                SYSTEM_CLOCK.set(instant);
                info!("Clock stepped to unix {}", instant.as_secs());
                SYNC_OUTCOME.signal(SyncOutcome::Synced(instant));
            }
            Err(e) => {
                warn!("SNTP exchange failed: {:?}", e);
                SYNC_OUTCOME.signal(SyncOutcome::Failed(e));
            }
        }
    }
}
