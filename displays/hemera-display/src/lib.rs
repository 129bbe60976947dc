//! Display abstraction for the Hemera e-paper calendar
//!
//! This crate provides:
//! - `EpdBackend` trait for the e-paper panel (the screens render
//!   through it without knowing about SPI, waveforms or refresh
//!   mechanics)
//! - Pixel layout helpers for the scaled 6x8 text cells
//! - `NullEpd`, a no-op backend used when panel init fails so the rest
//!   of the system keeps running and logging
//!
//! # Architecture
//!
//! The firmware's screen modules are generic over `EpdBackend`. The
//! concrete backend lives in the firmware crate next to the SPI wiring;
//! tests substitute a recording fake.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod layout;
pub mod null;

pub use backend::{DisplayError, EpdBackend};
pub use null::NullEpd;
