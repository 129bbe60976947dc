//! Device configuration
//!
//! The configuration is TOML embedded into the firmware at build time
//! and parsed by a custom no_std parser. The build script validates the
//! file on the host, so parse failures at runtime mean flash
//! corruption rather than typos.

pub mod toml;

pub use toml::{parse_config, DeviceConfig, NtpConfig, ParseError, WifiConfig};
