//! UTC to local civil time conversion
//!
//! The hardware clock keeps UTC; the display shows London local time.
//! The seasonal offset is derived from the UTC date itself, then the
//! breakdown is recomputed at the shifted instant so date rollovers
//! past midnight come out right.

use super::bst::summer_time_active;
use super::civil::{CivilTime, UtcInstant, MIN_PLAUSIBLE};
use super::ClockError;

/// The summer offset in seconds (+1 h)
pub const SUMMER_OFFSET_SECS: u32 = 3600;

/// A local civil time breakdown plus the offset that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    pub civil: CivilTime,
    /// 0 or 3600
    pub offset_seconds: u32,
    pub summer_time: bool,
}

/// Compute the local breakdown for a UTC instant
///
/// Purely a function of `utc`; no side effects. Instants before
/// [`MIN_PLAUSIBLE`] are rejected as a never-set clock so callers can
/// show "time not synced" instead of a bogus 1970 date.
pub fn local_now(utc: UtcInstant) -> Result<LocalTime, ClockError> {
    if utc < MIN_PLAUSIBLE {
        return Err(ClockError::NotSet);
    }

    let utc_breakdown = CivilTime::from_instant(utc);
    let summer = summer_time_active(&utc_breakdown);
    let offset_seconds = if summer { SUMMER_OFFSET_SECS } else { 0 };

    Ok(LocalTime {
        civil: CivilTime::from_instant(utc.offset_by(offset_seconds)),
        offset_seconds,
        summer_time: summer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::civil::Weekday;

    #[test]
    fn test_unset_clock_rejected() {
        assert_eq!(local_now(UtcInstant::from_secs(0)), Err(ClockError::NotSet));
        assert_eq!(
            local_now(UtcInstant::from_secs(MIN_PLAUSIBLE.as_secs() - 1)),
            Err(ClockError::NotSet)
        );
    }

    #[test]
    fn test_winter_passthrough() {
        // 2025-01-15 12:00:00 UTC - no offset in January
        let local = local_now(UtcInstant::from_secs(1_736_942_400)).unwrap();
        assert_eq!(local.offset_seconds, 0);
        assert!(!local.summer_time);
        assert_eq!(local.civil.hour, 12);
        assert_eq!(local.civil.day, 15);
    }

    #[test]
    fn test_summer_midnight_rollover() {
        // 2025-06-29 23:00:00 UTC (a Sunday) is 2025-06-30 00:00:00 BST
        let local = local_now(UtcInstant::from_secs(1_751_238_000)).unwrap();
        assert_eq!(local.offset_seconds, SUMMER_OFFSET_SECS);
        assert!(local.summer_time);
        assert_eq!(local.civil.year, 2025);
        assert_eq!(local.civil.month, 6);
        assert_eq!(local.civil.day, 30);
        assert_eq!(local.civil.hour, 0);
        assert_eq!(local.civil.minute, 0);
        assert_eq!(local.civil.second, 0);
        assert_eq!(local.civil.weekday, Weekday::Monday);
    }

    #[test]
    fn test_idempotent() {
        let utc = UtcInstant::from_secs(1_751_238_000);
        assert_eq!(local_now(utc).unwrap(), local_now(utc).unwrap());
    }
}
