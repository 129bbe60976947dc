//! Picture screen placeholder
//!
//! Photo rendering is not implemented; this keeps the B button doing
//! something sensible until it is.

use hemera_display::layout::MARGIN;
use hemera_display::{DisplayError, EpdBackend};

/// Render the placeholder and refresh the panel
pub fn render<B: EpdBackend>(epd: &mut B) -> Result<(), DisplayError> {
    epd.clear()?;
    epd.draw_text(MARGIN, MARGIN, 2, "TODO: Load Photo")?;
    epd.draw_text(MARGIN, 30, 1, "Not implemented yet!")?;
    epd.update()
}
