//! Log screen
//!
//! The ring's lines at the smallest scale, oldest first, matching what
//! the debug console saw.

use hemera_core::log::LogRing;
use hemera_display::layout::MARGIN;
use hemera_display::{DisplayError, EpdBackend};

/// Vertical pitch for scale-1 lines (8 px glyph + gap)
const LINE_PITCH: u16 = 15;

/// Render the log screen and refresh the panel
pub fn render<B: EpdBackend>(epd: &mut B, log: &LogRing) -> Result<(), DisplayError> {
    epd.clear()?;

    let mut y = MARGIN;
    for line in log.iter() {
        epd.draw_text(MARGIN, y, 1, line)?;
        y += LINE_PITCH;
    }

    epd.update()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil::FakeEpd;

    #[test]
    fn test_lines_stacked() {
        let mut log = LogRing::new();
        log.push(None, "first");
        log.push(None, "second");

        let mut epd = FakeEpd::new();
        render(&mut epd, &log).unwrap();

        assert_eq!(epd.texts.len(), 2);
        assert_eq!(epd.texts[0].1, MARGIN);
        assert_eq!(epd.texts[1].1, MARGIN + LINE_PITCH);
        assert_eq!(epd.updates, 1);
    }

    #[test]
    fn test_empty_log_still_refreshes() {
        let log = LogRing::new();
        let mut epd = FakeEpd::new();
        render(&mut epd, &log).unwrap();
        assert_eq!(epd.texts.len(), 0);
        assert_eq!(epd.updates, 1);
    }
}
