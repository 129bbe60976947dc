//! Pixel layout helpers for scaled text cells
//!
//! The panel is laid out in multiples of a 6x8 glyph cell. These
//! helpers keep the screen modules and their tests agreeing on the
//! arithmetic.

/// Glyph advance in pixels at scale 1
pub const GLYPH_WIDTH: u16 = 6;

/// Glyph height in pixels at scale 1
pub const GLYPH_HEIGHT: u16 = 8;

/// Outer margin used by all screens
pub const MARGIN: u16 = 5;

/// Vertical gap between stacked text blocks
pub const LINE_GAP: u16 = 5;

/// Width of `text` drawn at `scale` with the monospaced cell
pub fn text_width(text: &str, scale: u8) -> u16 {
    text.chars().count() as u16 * GLYPH_WIDTH * scale as u16
}

/// Height of a text block at `scale`
pub const fn text_height(scale: u8) -> u16 {
    GLYPH_HEIGHT * scale as u16
}

/// Y advance from one block to the next: block height plus the gap
pub const fn line_advance(scale: u8) -> u16 {
    text_height(scale) + LINE_GAP
}

/// X position that right-aligns a block of `text_width` px against the
/// panel's right margin
pub const fn right_aligned_x(panel_width: u16, text_width: u16) -> u16 {
    panel_width.saturating_sub(text_width + MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("HH:MM", 2), 5 * 6 * 2);
        assert_eq!(text_width("96T", 4), 3 * 6 * 4);
    }

    #[test]
    fn test_vertical_stacking() {
        // Day name at scale 4, then date at scale 3, then time at
        // scale 2 - the y positions the datetime screen uses
        let y_date = MARGIN + line_advance(4);
        let y_time = y_date + line_advance(3);
        assert_eq!(y_date, 5 + 32 + 5);
        assert_eq!(y_time, 42 + 24 + 5);
    }

    #[test]
    fn test_right_alignment() {
        let x = right_aligned_x(296, text_width("96T", 4));
        assert_eq!(x, 296 - 72 - 5);
        // Degenerate case: text wider than the panel pins to 0
        assert_eq!(right_aligned_x(100, 200), 0);
    }
}
