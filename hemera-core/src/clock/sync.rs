//! Resync scheduling
//!
//! Owns the "last synchronized" timestamp and decides when the clock is
//! due for a refresh from the network time source. This is the only
//! mutable state in the engine. A failed sync leaves `last_sync`
//! unchanged, so the next due-check retries after the same interval -
//! there is no shortened retry or backoff.

use super::civil::UtcInstant;

/// Default resync interval: once a day
pub const DEFAULT_RESYNC_INTERVAL_SECS: u32 = 86_400;

/// Tracks when the clock was last synchronized against the network
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncSchedule {
    last_sync: Option<UtcInstant>,
    interval_secs: u32,
}

impl SyncSchedule {
    /// Create a schedule that has never synced (due immediately)
    pub const fn new(interval_secs: u32) -> Self {
        Self {
            last_sync: None,
            interval_secs,
        }
    }

    /// Is a resync due at `now`?
    ///
    /// Always true before the first successful sync. If the clock
    /// stepped backwards past `last_sync` the elapsed time saturates to
    /// zero and the schedule simply waits out a fresh interval.
    pub fn is_due(&self, now: UtcInstant) -> bool {
        match self.last_sync {
            None => true,
            Some(last) => now.saturating_secs_since(last) >= self.interval_secs as u64,
        }
    }

    /// Record a successful sync at `now`
    ///
    /// Call only after the network collaborator reports success.
    pub fn record_sync(&mut self, now: UtcInstant) {
        self.last_sync = Some(now);
    }

    /// Has any sync ever succeeded?
    pub fn has_synced(&self) -> bool {
        self.last_sync.is_some()
    }

    /// The last successful sync, if any
    pub fn last_sync(&self) -> Option<UtcInstant> {
        self.last_sync
    }

    /// The configured resync interval in seconds
    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }
}

impl Default for SyncSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_RESYNC_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_at_boot() {
        let schedule = SyncSchedule::default();
        assert!(!schedule.has_synced());
        assert!(schedule.is_due(UtcInstant::from_secs(0)));
        assert!(schedule.is_due(UtcInstant::from_secs(1_751_238_000)));
    }

    #[test]
    fn test_not_due_after_sync() {
        let mut schedule = SyncSchedule::default();
        let now = UtcInstant::from_secs(1_751_238_000);
        schedule.record_sync(now);
        assert!(schedule.has_synced());
        assert!(!schedule.is_due(now));
        assert!(!schedule.is_due(now.offset_by(DEFAULT_RESYNC_INTERVAL_SECS - 1)));
    }

    #[test]
    fn test_due_after_interval() {
        let mut schedule = SyncSchedule::new(600);
        let now = UtcInstant::from_secs(1_751_238_000);
        schedule.record_sync(now);
        assert!(!schedule.is_due(now.offset_by(599)));
        assert!(schedule.is_due(now.offset_by(600)));
        assert!(schedule.is_due(now.offset_by(601)));
    }

    #[test]
    fn test_clock_step_backwards() {
        let mut schedule = SyncSchedule::new(600);
        schedule.record_sync(UtcInstant::from_secs(10_000));
        // Clock stepped back below last_sync: not due, waits out a
        // fresh interval from the recorded point
        assert!(!schedule.is_due(UtcInstant::from_secs(9_000)));
        assert!(schedule.is_due(UtcInstant::from_secs(10_600)));
    }

    #[test]
    fn test_failed_sync_leaves_schedule_unchanged() {
        let mut schedule = SyncSchedule::new(600);
        let now = UtcInstant::from_secs(10_000);
        schedule.record_sync(now);
        // A failed sync never calls record_sync; the schedule still
        // points at the old instant and comes due on the old cadence.
        assert_eq!(schedule.last_sync(), Some(now));
        assert!(schedule.is_due(now.offset_by(600)));
    }
}
