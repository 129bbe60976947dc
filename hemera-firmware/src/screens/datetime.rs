//! Main date/time screen
//!
//! Left column: weekday name, long date, time, ISO week number.
//! Right column: the compact date token with its "rickdate" label.
//! Falls back to a "not synced" notice while the clock is unset.

use hemera_core::clock::format::{iso_week_number, long_date, short_time};
use hemera_core::clock::rickdate::compact_date;
use hemera_core::clock::LocalTime;
use hemera_display::layout::{line_advance, right_aligned_x, MARGIN};
use hemera_display::{DisplayError, EpdBackend};

use core::fmt::Write;
use heapless::String;

/// Render the date/time screen and refresh the panel
pub fn render<B: EpdBackend>(epd: &mut B, local: Option<&LocalTime>) -> Result<(), DisplayError> {
    epd.clear()?;

    match local {
        Some(local) => draw_clock(epd, local)?,
        None => draw_unsynced(epd)?,
    }

    epd.update()
}

fn draw_clock<B: EpdBackend>(epd: &mut B, local: &LocalTime) -> Result<(), DisplayError> {
    let t = &local.civil;
    let (width, _) = epd.dimensions();

    // Left column, stacked top to bottom
    epd.draw_text(MARGIN, MARGIN, 4, t.weekday.name())?;

    let y_date = MARGIN + line_advance(4);
    epd.draw_text(MARGIN, y_date, 3, &long_date(t))?;

    let y_time = y_date + line_advance(3);
    epd.draw_text(MARGIN, y_time, 2, &short_time(t))?;

    let y_week = y_time + line_advance(2);
    let mut week: String<4> = String::new();
    let _ = write!(week, "WK{:02}", iso_week_number(t));
    epd.draw_text(MARGIN, y_week, 4, &week)?;

    // Right column: token over its label, both right-aligned
    let token = compact_date(t);
    let x_token = right_aligned_x(width, epd.measure_text(&token, 4));
    epd.draw_text(x_token, MARGIN, 4, &token)?;

    let label = "rickdate";
    let x_label = right_aligned_x(width, epd.measure_text(label, 2));
    epd.draw_text(x_label, MARGIN + line_advance(4), 2, label)?;

    Ok(())
}

fn draw_unsynced<B: EpdBackend>(epd: &mut B) -> Result<(), DisplayError> {
    epd.draw_text(MARGIN, MARGIN, 2, "Time Not Synced")?;
    epd.draw_text(MARGIN, 30, 1, "Connect WiFi & NTP")?;
    epd.draw_text(MARGIN, 45, 1, "Press A to retry")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil::FakeEpd;
    use hemera_core::clock::civil::UtcInstant;
    use hemera_core::clock::local::local_now;

    #[test]
    fn test_synced_layout() {
        // 2025-06-29 23:00 UTC -> Monday June 30, 00:00 BST
        let local = local_now(UtcInstant::from_secs(1_751_238_000)).unwrap();
        let mut epd = FakeEpd::new();
        render(&mut epd, Some(&local)).unwrap();

        assert_eq!(epd.updates, 1);
        assert!(epd.contains("Monday"));
        assert!(epd.contains("June 30, 2025"));
        assert!(epd.contains("00:00"));
        assert!(epd.contains("WK27"));
        assert!(epd.contains("96U")); // token for June 30
        assert!(epd.contains("rickdate"));
    }

    #[test]
    fn test_unsynced_fallback() {
        let mut epd = FakeEpd::new();
        render(&mut epd, None).unwrap();
        assert!(epd.contains("Time Not Synced"));
        assert!(!epd.contains("rickdate"));
    }
}
