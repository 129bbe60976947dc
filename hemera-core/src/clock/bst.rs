//! British summer time rule
//!
//! Summer time runs from the last Sunday in March to the last Sunday in
//! October. The real transitions happen at 01:00 UTC; this rule works at
//! day granularity, so the transition days themselves are classified
//! wholesale. Whether hour-level precision is needed is a pending
//! product decision.

use super::civil::{days_from_civil, CivilTime, Weekday};

/// Day of the month of the last Sunday, for 31-day months
///
/// Finds the weekday of the 31st, then steps back to the nearest Sunday.
pub fn last_sunday(year: u16, month: u8) -> u8 {
    let w31 = Weekday::from_days(days_from_civil(year as i32, month, 31)).index();
    31 - ((w31 + 7 - Weekday::Sunday.index()) % 7)
}

/// Is the summer (+1 h) offset in effect on this UTC date?
pub fn summer_time_active(date: &CivilTime) -> bool {
    match date.month {
        // April through September: always summer
        4..=9 => true,
        3 => date.day >= last_sunday(date.year, 3),
        10 => date.day < last_sunday(date.year, 10),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::civil::UtcInstant;

    fn civil(secs: u64) -> CivilTime {
        CivilTime::from_instant(UtcInstant::from_secs(secs))
    }

    #[test]
    fn test_last_sundays() {
        // 2024: Mar 31 / Oct 27; 2025: Mar 30 / Oct 26; 2026: Mar 29 / Oct 25
        assert_eq!(last_sunday(2024, 3), 31);
        assert_eq!(last_sunday(2024, 10), 27);
        assert_eq!(last_sunday(2025, 3), 30);
        assert_eq!(last_sunday(2025, 10), 26);
        assert_eq!(last_sunday(2026, 3), 29);
        assert_eq!(last_sunday(2026, 10), 25);
    }

    #[test]
    fn test_midwinter_and_midsummer() {
        // 2025-01-01
        assert!(!summer_time_active(&civil(1_735_689_600)));
        // 2025-07-01
        assert!(summer_time_active(&civil(1_751_328_000)));
    }

    #[test]
    fn test_march_boundary() {
        // Last Sunday in March 2025 is the 30th
        let saturday = civil(1_743_206_400); // 2025-03-29
        let sunday = civil(1_743_292_800); // 2025-03-30
        assert_eq!(saturday.weekday, Weekday::Saturday);
        assert_eq!(sunday.weekday, Weekday::Sunday);
        assert!(!summer_time_active(&saturday));
        assert!(summer_time_active(&sunday));
    }

    #[test]
    fn test_october_boundary() {
        // Last Sunday in October 2025 is the 26th
        let saturday = civil(1_761_350_400); // 2025-10-25
        let sunday = civil(1_761_436_800); // 2025-10-26
        assert_eq!(saturday.weekday, Weekday::Saturday);
        assert_eq!(sunday.weekday, Weekday::Sunday);
        assert!(summer_time_active(&saturday));
        assert!(!summer_time_active(&sunday));
    }

    #[test]
    fn test_adjacent_year_boundaries() {
        // 2024: Mar 31 is the transition day
        let mar30 = civil(1_711_756_800); // 2024-03-30
        let mar31 = civil(1_711_843_200); // 2024-03-31
        assert!(!summer_time_active(&mar30));
        assert!(summer_time_active(&mar31));

        // 2024: Oct 27 ends summer time
        let oct26 = civil(1_729_900_800); // 2024-10-26
        let oct27 = civil(1_729_987_200); // 2024-10-27
        assert!(summer_time_active(&oct26));
        assert!(!summer_time_active(&oct27));
    }
}
