//! System clock
//!
//! The RP2040 has no battery-backed RTC, so wall-clock time is kept as
//! an offset between the Unix epoch and the monotonic uptime counter:
//! `unix = offset + uptime`. The offset is written only by the sync
//! task when an SNTP exchange lands; an offset of zero means the clock
//! has never been set and readers get `None` instead of a 1970 date.

use embassy_time::Instant;
use portable_atomic::{AtomicU64, Ordering};

use hemera_core::clock::UtcInstant;

/// Process-wide clock instance
pub static SYSTEM_CLOCK: SystemClock = SystemClock::new();

/// Wall-clock time derived from uptime plus a sync-supplied offset
pub struct SystemClock {
    /// Unix seconds at uptime zero; 0 = never synced
    offset_secs: AtomicU64,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self {
            offset_secs: AtomicU64::new(0),
        }
    }

    /// Current UTC time, or `None` if no sync has ever landed
    pub fn now(&self) -> Option<UtcInstant> {
        let offset = self.offset_secs.load(Ordering::Relaxed);
        if offset == 0 {
            return None;
        }
        Some(UtcInstant::from_secs(offset + uptime_secs()))
    }

    /// Step the clock to `utc`
    ///
    /// Called only by the sync task after a successful SNTP exchange.
    /// The jump may be forward or backward; readers see the new time on
    /// their next query.
    pub fn set(&self, utc: UtcInstant) {
        let offset = utc.as_secs().saturating_sub(uptime_secs());
        self.offset_secs.store(offset, Ordering::Relaxed);
    }

    /// Has the clock ever been set?
    pub fn is_set(&self) -> bool {
        self.offset_secs.load(Ordering::Relaxed) != 0
    }
}

fn uptime_secs() -> u64 {
    Instant::now().as_secs()
}
