//! E-paper display glue
//!
//! The screens render through the `EpdBackend` trait from
//! `hemera-display`; this module provides the concrete Inky Pack
//! implementation and its font.

pub mod epd;
pub mod font;

pub use epd::{InkyPack, HEIGHT, WIDTH};
