//! E-paper backend trait
//!
//! The narrow interface between screen rendering and the panel. Text is
//! drawn in a monospaced 6x8 cell scaled by an integer factor; the
//! backend owns the frame buffer and the refresh.

use crate::layout;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
}

/// E-paper backend trait
///
/// Provides a hardware-agnostic interface for rendering text screens.
/// Implementations handle the panel specifics; `NullEpd` discards
/// everything.
pub trait EpdBackend {
    /// Clear the frame buffer to white
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// `scale` is an integer multiplier on the 6x8 glyph cell.
    fn draw_text(&mut self, x: u16, y: u16, scale: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush the frame buffer to the panel
    ///
    /// E-paper refresh is slow (hundreds of ms); callers batch drawing
    /// and update once per screen.
    fn update(&mut self) -> Result<(), DisplayError>;

    /// Panel dimensions in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Width in pixels of `text` drawn at `scale`
    ///
    /// Default assumes the monospaced cell; backends with a different
    /// font metric override this.
    fn measure_text(&self, text: &str, scale: u8) -> u16 {
        layout::text_width(text, scale)
    }
}
