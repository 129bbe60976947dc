//! WiFi association
//!
//! Joins the configured access point with a bounded number of attempts,
//! then waits for DHCP to hand out an address. Association happens once
//! at boot; the link is assumed to stay up afterwards (the SNTP
//! exchange surfaces its own errors if it does not).

use cyw43::JoinOptions;
use defmt::{info, warn};
use embassy_net::Stack;
use embassy_time::{with_timeout, Duration, Timer};

use crate::channels::log_line;

/// Association attempts before giving up
const JOIN_ATTEMPTS: u32 = 3;

/// Per-attempt association timeout
const JOIN_TIMEOUT: Duration = Duration::from_secs(20);

/// DHCP configuration timeout
const DHCP_TIMEOUT: Duration = Duration::from_secs(15);

/// Delay between failed attempts
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// WiFi bring-up errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WifiError {
    /// All association attempts failed
    Join,
    /// Associated, but DHCP never configured the interface
    Dhcp,
}

/// Join the configured access point
pub async fn join(
    control: &mut cyw43::Control<'_>,
    ssid: &str,
    password: &str,
) -> Result<(), WifiError> {
    log_line("Connecting to WiFi...");

    for attempt in 1..=JOIN_ATTEMPTS {
        info!("Joining '{}' (attempt {}/{})", ssid, attempt, JOIN_ATTEMPTS);

        let join = control.join(ssid, JoinOptions::new(password.as_bytes()));
        match with_timeout(JOIN_TIMEOUT, join).await {
            Ok(Ok(())) => {
                info!("WiFi associated");
                return Ok(());
            }
            Ok(Err(e)) => {
                warn!("Join failed with status {}", e.status);
                log_line("WiFi join failed, retrying");
            }
            Err(_) => {
                warn!("Join attempt timed out");
                log_line("WiFi join timed out, retrying");
            }
        }

        Timer::after(RETRY_DELAY).await;
    }

    Err(WifiError::Join)
}

/// Wait for DHCP to configure the interface
pub async fn wait_for_ip(stack: Stack<'_>) -> Result<(), WifiError> {
    match with_timeout(DHCP_TIMEOUT, stack.wait_config_up()).await {
        Ok(()) => {
            if let Some(config) = stack.config_v4() {
                info!("DHCP up, address {}", config.address);
            }
            Ok(())
        }
        Err(_) => Err(WifiError::Dhcp),
    }
}
