//! No-op backend
//!
//! Stands in for the panel when init fails: drawing is discarded but
//! the system keeps running, logging to the debug channel.

use crate::backend::{DisplayError, EpdBackend};

/// A backend that accepts and discards all drawing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEpd {
    width: u16,
    height: u16,
}

impl NullEpd {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl EpdBackend for NullEpd {
    fn clear(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_text(&mut self, _x: u16, _y: u16, _scale: u8, _text: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discards_everything() {
        let mut epd = NullEpd::new(296, 128);
        assert_eq!(epd.dimensions(), (296, 128));
        assert_eq!(epd.clear(), Ok(()));
        assert_eq!(epd.draw_text(0, 0, 4, "Monday"), Ok(()));
        assert_eq!(epd.update(), Ok(()));
    }
}
