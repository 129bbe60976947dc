//! The compact date token ("rickdate")
//!
//! Year, month and day are each base-36 encoded with no per-segment
//! padding, concatenated, and the last three characters of the result
//! are shown. Distinct dates can collide once segments of varying width
//! concatenate differently; the token is a display novelty and must
//! never be used as a key.

use heapless::String;

use super::base36;
use super::civil::CivilTime;

/// Token length in characters
pub const TOKEN_LEN: usize = 3;

/// Build the 3-character compact date token for a date
pub fn compact_date(t: &CivilTime) -> String<TOKEN_LEN> {
    let mut full: String<{ 3 * base36::MAX_DIGITS }> = String::new();
    let _ = full.push_str(&base36::encode(t.year as u32));
    let _ = full.push_str(&base36::encode(t.month as u32));
    let _ = full.push_str(&base36::encode(t.day as u32));

    let tail = full.len().saturating_sub(TOKEN_LEN);
    let mut out = String::new();
    // The alphabet is pure ASCII, so byte slicing is char slicing
    let _ = out.push_str(&full[tail..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::civil::UtcInstant;

    fn civil(secs: u64) -> CivilTime {
        CivilTime::from_instant(UtcInstant::from_secs(secs))
    }

    #[test]
    fn test_reference_token() {
        // 2025-06-29: "1U9" + "6" + "T" = "1U96T", last 3 = "96T"
        let t = civil(1_751_238_000);
        assert_eq!(compact_date(&t).as_str(), "96T");
    }

    #[test]
    fn test_two_digit_segments() {
        // 2025-11-30: "1U9" + "B" + "U" = "1U9BU", last 3 = "9BU"
        let t = civil(1_764_460_800);
        assert_eq!(compact_date(&t).as_str(), "9BU");
    }

    #[test]
    fn test_short_segments() {
        let jan1 = civil(1_735_689_600); // 2025-01-01 -> "1U911", last 3 "911"
        assert_eq!(compact_date(&jan1).as_str(), "911");
    }

    #[test]
    fn test_tokens_are_not_unique() {
        // The truncation is lossy: a year whose encoding ends in "9"
        // collides with 2025 ("1U9") for the same month/day.
        let a = civil(1_751_238_000); // 2025-06-29 -> "96T"
        let mut b = a;
        b.year = 45; // base36(45) = "19", so "196T" -> "96T"
        assert_eq!(compact_date(&a).as_str(), compact_date(&b).as_str());
    }
}
