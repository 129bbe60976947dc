//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use heapless::String;

use hemera_core::clock::UtcInstant;
use hemera_core::state::Button;

use crate::net::sntp::SyncError;
use crate::net::wifi::WifiError;

/// Channel capacity for debounced button presses
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Channel capacity for log lines headed for the log screen
const LOG_CHANNEL_SIZE: usize = 8;

/// Maximum characters of a log line payload (the ring adds the stamp)
pub const LOG_MSG_LEN: usize = 36;

/// Result of a single sync attempt, reported by the sync task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncOutcome {
    /// Clock was stepped to this instant
    Synced(UtcInstant),
    /// Attempt failed; the clock and schedule are untouched
    Failed(SyncError),
}

/// Debounced button presses from the button task
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Log lines from any task, drained into the controller's ring
pub static LOG_CHANNEL: Channel<CriticalSectionRawMutex, String<LOG_MSG_LEN>, LOG_CHANNEL_SIZE> =
    Channel::new();

/// WiFi association result, signalled once by main after bring-up
pub static WIFI_STATUS: Signal<CriticalSectionRawMutex, Result<(), WifiError>> = Signal::new();

/// Request one SNTP exchange (controller -> sync task)
pub static SYNC_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Outcome of the last SNTP exchange (sync task -> controller)
pub static SYNC_OUTCOME: Signal<CriticalSectionRawMutex, SyncOutcome> = Signal::new();

/// Push a formatted line onto the log channel, dropping it if full
///
/// Log lines are best-effort; the defmt stream is the reliable record.
pub fn log_line(msg: &str) {
    let mut line: String<LOG_MSG_LEN> = String::new();
    let take = msg.len().min(LOG_MSG_LEN);
    let _ = line.push_str(&msg[..take]);
    let _ = LOG_CHANNEL.try_send(line);
}
