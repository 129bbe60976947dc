//! Board-agnostic core logic for the Hemera e-paper calendar firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The time-and-date engine: UTC decomposition, the British summer
//!   time rule, display formatting and the compact date token
//! - The resync scheduler that decides when the clock should be
//!   refreshed from the network time source
//! - The bounded log ring shown on the log screen
//! - The screen-cycling state machine

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest) need std
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod clock;
pub mod log;
pub mod state;
