//! Single-shot SNTP client
//!
//! One 48-byte request, one response, no clock discipline: the server's
//! transmit timestamp becomes the new wall-clock time. Round-trip delay
//! is well under a second on any sane network, which is noise next to
//! the display's minute-level resolution.

use defmt::{debug, warn};
use embassy_net::dns::DnsQueryType;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{IpEndpoint, Stack};
use embassy_time::{with_timeout, Duration};

use hemera_core::clock::UtcInstant;

/// NTP server port
const SNTP_PORT: u16 = 123;

/// Local port for the exchange
const LOCAL_PORT: u16 = 57_123;

/// SNTP packet size (no authenticator)
const PACKET_LEN: usize = 48;

/// Seconds between the NTP era origin (1900) and the Unix epoch (1970)
const NTP_UNIX_DELTA: u64 = 2_208_988_800;

/// Request header: LI=0, VN=3, Mode=3 (client)
const CLIENT_HEADER: u8 = 0x1B;

/// Offset of the transmit timestamp in the packet
const XMIT_OFFSET: usize = 40;

/// Errors from a sync attempt
///
/// All non-fatal: the clock and the resync schedule stay untouched and
/// the next due-check retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Hostname did not resolve
    Dns,
    /// Socket bind/send/receive failed
    Socket,
    /// No response within the timeout
    Timeout,
    /// Response was malformed or a kiss-of-death
    Protocol,
}

/// Perform one SNTP exchange and return the server's idea of now
pub async fn query(
    stack: Stack<'_>,
    server: &str,
    timeout: Duration,
) -> Result<UtcInstant, SyncError> {
    let addrs = stack
        .dns_query(server, DnsQueryType::A)
        .await
        .map_err(|_| SyncError::Dns)?;
    let addr = *addrs.first().ok_or(SyncError::Dns)?;
    debug!("SNTP server {} -> {}", server, addr);

    let mut rx_meta = [PacketMetadata::EMPTY; 2];
    let mut rx_buffer = [0u8; 96];
    let mut tx_meta = [PacketMetadata::EMPTY; 2];
    let mut tx_buffer = [0u8; 64];
    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(LOCAL_PORT).map_err(|_| SyncError::Socket)?;

    let endpoint = IpEndpoint::new(addr, SNTP_PORT);
    socket
        .send_to(&build_request(), endpoint)
        .await
        .map_err(|_| SyncError::Socket)?;

    let mut response = [0u8; PACKET_LEN];
    let (len, _) = with_timeout(timeout, socket.recv_from(&mut response))
        .await
        .map_err(|_| SyncError::Timeout)?
        .map_err(|_| SyncError::Socket)?;

    let instant = parse_response(&response[..len])?;
    debug!("SNTP ok, unix {}", instant.as_secs());
    Ok(instant)
}

/// Build the 48-byte client request
fn build_request() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = CLIENT_HEADER;
    packet
}

/// Extract the transmit timestamp from a server response
fn parse_response(buf: &[u8]) -> Result<UtcInstant, SyncError> {
    if buf.len() < PACKET_LEN {
        warn!("SNTP response truncated ({} bytes)", buf.len());
        return Err(SyncError::Protocol);
    }

    // Mode must be server (4) or broadcast (5)
    let mode = buf[0] & 0x07;
    if mode != 4 && mode != 5 {
        return Err(SyncError::Protocol);
    }

    // Stratum 0 is a kiss-of-death packet
    if buf[1] == 0 {
        return Err(SyncError::Protocol);
    }

    let secs = u32::from_be_bytes([
        buf[XMIT_OFFSET],
        buf[XMIT_OFFSET + 1],
        buf[XMIT_OFFSET + 2],
        buf[XMIT_OFFSET + 3],
    ]) as u64;

    // A transmit timestamp of zero (or anything before 1970) means the
    // server never filled the field in
    if secs <= NTP_UNIX_DELTA {
        return Err(SyncError::Protocol);
    }

    Ok(UtcInstant::from_secs(secs - NTP_UNIX_DELTA))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_response(secs_1900: u32) -> [u8; PACKET_LEN] {
        let mut packet = [0u8; PACKET_LEN];
        packet[0] = 0x1C; // LI=0, VN=3, Mode=4 (server)
        packet[1] = 2; // stratum
        packet[XMIT_OFFSET..XMIT_OFFSET + 4].copy_from_slice(&secs_1900.to_be_bytes());
        packet
    }

    #[test]
    fn test_request_header() {
        let packet = build_request();
        assert_eq!(packet.len(), PACKET_LEN);
        assert_eq!(packet[0], 0x1B);
        assert!(packet[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_parse_known_instant() {
        // 2025-06-29 23:00:00 UTC in the 1900 era
        let secs_1900 = (1_751_238_000u64 + NTP_UNIX_DELTA) as u32;
        let instant = parse_response(&server_response(secs_1900)).unwrap();
        assert_eq!(instant.as_secs(), 1_751_238_000);
    }

    #[test]
    fn test_rejects_short_packet() {
        assert_eq!(parse_response(&[0u8; 12]), Err(SyncError::Protocol));
    }

    #[test]
    fn test_rejects_client_mode() {
        let mut packet = server_response(3_900_000_000);
        packet[0] = 0x1B; // client mode reflected back
        assert_eq!(parse_response(&packet), Err(SyncError::Protocol));
    }

    #[test]
    fn test_rejects_kiss_of_death() {
        let mut packet = server_response(3_900_000_000);
        packet[1] = 0;
        assert_eq!(parse_response(&packet), Err(SyncError::Protocol));
    }

    #[test]
    fn test_rejects_empty_timestamp() {
        assert_eq!(parse_response(&server_response(0)), Err(SyncError::Protocol));
    }
}
