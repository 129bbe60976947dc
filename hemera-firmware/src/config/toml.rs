//! Simple TOML parser for device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed
//! for Hemera configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings
//! - Datetime values
//! - Arrays and inline tables
//! - Dotted keys

use heapless::String;

use hemera_core::clock::sync::DEFAULT_RESYNC_INTERVAL_SECS;

/// Maximum SSID length (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum NTP server hostname length
pub const MAX_SERVER_LEN: usize = 48;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// A value exceeded its heapless capacity
    ValueTooLong,
    /// A required key was never set
    MissingKey,
}

/// WiFi association settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WifiConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
}

/// Time sync settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NtpConfig {
    pub server: String<MAX_SERVER_LEN>,
    pub resync_interval_s: u32,
}

impl Default for NtpConfig {
    fn default() -> Self {
        let mut server = String::new();
        let _ = server.push_str("pool.ntp.org");
        Self {
            server,
            resync_interval_s: DEFAULT_RESYNC_INTERVAL_SECS,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    pub wifi: WifiConfig,
    pub ntp: NtpConfig,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Wifi,
    Ntp,
}

/// Parse TOML configuration into DeviceConfig
///
/// Unknown sections and keys are skipped so a newer config file still
/// loads on older firmware. A config without WiFi credentials is
/// rejected - the device cannot do anything useful offline.
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Parse key = value
        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    if config.wifi.ssid.is_empty() {
        return Err(ParseError::MissingKey);
    }

    Ok(config)
}

/// Parse a section header like "wifi" or "ntp"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "wifi" => Ok(Section::Wifi),
        "ntp" => Ok(Section::Ntp),
        // Unknown sections are tolerated; their keys fall through
        _ => Ok(Section::Root),
    }
}

/// Apply a key/value pair in the current section
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Wifi => match key {
            "ssid" => config.wifi.ssid = parse_heapless_string(value)?,
            "password" => config.wifi.password = parse_heapless_string(value)?,
            _ => {}
        },
        Section::Ntp => match key {
            "server" => config.ntp.server = parse_heapless_string(value)?,
            "resync_interval_s" => config.ntp.resync_interval_s = parse_int(value)?,
            _ => {}
        },
        Section::Root => {}
    }
    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a string value into a bounded heapless String
fn parse_heapless_string<const N: usize>(value: &str) -> Result<String<N>, ParseError> {
    let s = parse_string(value)?;
    String::try_from(s).map_err(|_| ParseError::ValueTooLong)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Device configuration
[wifi]
ssid = "home-network"
password = "hunter2!"

[ntp]
server = "time.cloudflare.com"
resync_interval_s = 3600  # hourly
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.wifi.ssid.as_str(), "home-network");
        assert_eq!(config.wifi.password.as_str(), "hunter2!");
        assert_eq!(config.ntp.server.as_str(), "time.cloudflare.com");
        assert_eq!(config.ntp.resync_interval_s, 3600);
    }

    #[test]
    fn test_ntp_defaults() {
        let config = parse_config("[wifi]\nssid = \"net\"\npassword = \"pw\"\n").unwrap();
        assert_eq!(config.ntp.server.as_str(), "pool.ntp.org");
        assert_eq!(config.ntp.resync_interval_s, DEFAULT_RESYNC_INTERVAL_SECS);
    }

    #[test]
    fn test_missing_wifi_rejected() {
        assert_eq!(
            parse_config("[ntp]\nserver = \"pool.ntp.org\"\n"),
            Err(ParseError::MissingKey)
        );
    }

    #[test]
    fn test_unknown_keys_skipped() {
        let config_str = r#"
[wifi]
ssid = "net"
password = "pw"
country = "GB"

[display]
rotation = 180
"#;
        let config = parse_config(config_str).unwrap();
        assert_eq!(config.wifi.ssid.as_str(), "net");
    }

    #[test]
    fn test_inline_comment_stripped() {
        let config = parse_config(
            "[wifi]\nssid = \"net\" # the flat's AP\npassword = \"p#w\"\n",
        )
        .unwrap();
        assert_eq!(config.wifi.ssid.as_str(), "net");
        assert_eq!(config.wifi.password.as_str(), "p#w");
    }

    #[test]
    fn test_bad_interval_rejected() {
        let config_str = "[wifi]\nssid = \"net\"\npassword = \"pw\"\n[ntp]\nresync_interval_s = \"daily\"\n";
        assert_eq!(parse_config(config_str), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_overlong_value_rejected() {
        let config_str = "[wifi]\nssid = \"0123456789012345678901234567890123456789\"\npassword = \"pw\"\n";
        assert_eq!(parse_config(config_str), Err(ParseError::ValueTooLong));
    }
}
