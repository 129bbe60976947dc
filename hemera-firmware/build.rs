//! Build script for hemera-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
///
/// The firmware's own parser is a deliberately small TOML subset; this
/// host-side check catches syntax errors and missing keys before they
/// reach the device.
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");
    if !config_path.exists() {
        panic!(
            "display.toml not found. The firmware embeds its configuration \
             at build time; create display.toml in the hemera-firmware \
             directory (wifi ssid/password, ntp server)."
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("Failed to read display.toml: {}", e),
    };

    let parsed: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("display.toml is not valid TOML: {}", e),
    };

    let wifi = parsed
        .get("wifi")
        .unwrap_or_else(|| panic!("display.toml is missing the [wifi] section"));
    for key in ["ssid", "password"] {
        if wifi.get(key).and_then(|v| v.as_str()).is_none() {
            panic!("display.toml [wifi] is missing a string `{}`", key);
        }
    }

    if let Some(ntp) = parsed.get("ntp") {
        if let Some(interval) = ntp.get("resync_interval_s") {
            let secs = interval
                .as_integer()
                .unwrap_or_else(|| panic!("[ntp] resync_interval_s must be an integer"));
            if secs < 60 {
                panic!("[ntp] resync_interval_s of {}s would hammer the server", secs);
            }
        }
    }
}
