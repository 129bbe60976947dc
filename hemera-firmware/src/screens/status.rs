//! Boot and error banners
//!
//! Shown while the system is coming up and when WiFi or the first time
//! sync fail. The error banners point at the C button, which opens the
//! log screen for detail.

use hemera_display::layout::MARGIN;
use hemera_display::{DisplayError, EpdBackend};

/// Render the boot screen
pub fn render_boot<B: EpdBackend>(epd: &mut B) -> Result<(), DisplayError> {
    epd.clear()?;
    epd.draw_text(MARGIN, MARGIN, 3, "HEMERA")?;
    epd.draw_text(MARGIN, 40, 1, "Connecting...")?;
    epd.update()
}

/// Render the WiFi failure banner
pub fn render_wifi_error<B: EpdBackend>(epd: &mut B) -> Result<(), DisplayError> {
    epd.clear()?;
    epd.draw_text(MARGIN, MARGIN, 2, "WiFi Error!")?;
    epd.draw_text(MARGIN, 30, 1, "Check display.toml and network")?;
    epd.draw_text(MARGIN, 45, 1, "Press C for details")?;
    epd.update()
}

/// Render the time sync failure banner
pub fn render_sync_error<B: EpdBackend>(epd: &mut B) -> Result<(), DisplayError> {
    epd.clear()?;
    epd.draw_text(MARGIN, MARGIN, 2, "NTP Error!")?;
    epd.draw_text(MARGIN, 30, 1, "Could not sync time.")?;
    epd.draw_text(MARGIN, 45, 1, "Check WiFi connection & NTP server.")?;
    epd.draw_text(MARGIN, 60, 1, "Press C for details")?;
    epd.update()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil::FakeEpd;

    #[test]
    fn test_banners_refresh_once() {
        let mut epd = FakeEpd::new();
        render_boot(&mut epd).unwrap();
        assert_eq!(epd.updates, 1);
        assert!(epd.contains("HEMERA"));

        render_wifi_error(&mut epd).unwrap();
        assert!(epd.contains("WiFi Error!"));

        render_sync_error(&mut epd).unwrap();
        assert!(epd.contains("NTP Error!"));
    }
}
