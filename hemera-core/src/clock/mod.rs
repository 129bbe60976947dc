//! The time-and-date engine
//!
//! Everything here is a pure function of its inputs except
//! [`sync::SyncSchedule`], which owns the "last synchronized" timestamp.
//! The conversion pipeline is:
//!
//! 1. [`civil`] decomposes a UTC instant into calendar/clock fields
//! 2. [`bst`] decides whether the seasonal (summer) offset is in effect
//! 3. [`local`] combines the two into a local civil time breakdown
//! 4. [`format`] and [`rickdate`] turn a breakdown into display strings

pub mod base36;
pub mod bst;
pub mod civil;
pub mod format;
pub mod local;
pub mod rickdate;
pub mod sync;

pub use civil::{CivilTime, UtcInstant, Weekday};
pub use local::LocalTime;
pub use sync::SyncSchedule;

/// Errors from the clock engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The hardware clock has never been set; refusing to compute a
    /// date from an epoch-zero reading
    NotSet,
    /// A calendar field was out of range at a boundary where external
    /// input enters
    InvalidField,
}
