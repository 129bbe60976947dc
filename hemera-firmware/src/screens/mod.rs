//! Screen renderers
//!
//! Each screen is a free function that draws onto any `EpdBackend` and
//! triggers one panel refresh. All layout arithmetic comes from
//! `hemera_display::layout` so the pixel math is testable off-target.

pub mod datetime;
pub mod log;
pub mod picture;
pub mod status;

#[cfg(test)]
pub(crate) mod testutil {
    use heapless::{String, Vec};
    use hemera_display::{DisplayError, EpdBackend};

    /// Records draw calls for screen tests
    pub struct FakeEpd {
        pub texts: Vec<(u16, u16, u8, String<32>), 16>,
        pub clears: u32,
        pub updates: u32,
    }

    impl FakeEpd {
        pub fn new() -> Self {
            Self {
                texts: Vec::new(),
                clears: 0,
                updates: 0,
            }
        }

        /// Was `needle` drawn anywhere?
        pub fn contains(&self, needle: &str) -> bool {
            self.texts.iter().any(|(_, _, _, s)| s.as_str() == needle)
        }
    }

    impl EpdBackend for FakeEpd {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            self.texts.clear();
            Ok(())
        }

        fn draw_text(
            &mut self,
            x: u16,
            y: u16,
            scale: u8,
            text: &str,
        ) -> Result<(), DisplayError> {
            let mut s: String<32> = String::new();
            let _ = s.push_str(&text[..text.len().min(32)]);
            let _ = self.texts.push((x, y, scale, s));
            Ok(())
        }

        fn update(&mut self) -> Result<(), DisplayError> {
            self.updates += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            (296, 128)
        }
    }
}
