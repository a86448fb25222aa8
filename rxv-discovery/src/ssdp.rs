//! SSDP (Simple Service Discovery Protocol) client
//!
//! Internal M-SEARCH sender and response reader. The reader is bounded by a
//! deadline rather than a per-packet timeout, so a scan always lasts for the
//! whole window and never ends early.

use std::net::{SocketAddr, UdpSocket};
use std::time::{Duration, Instant};
use crate::error::{DiscoveryError, Result};

/// SSDP response headers relevant to discovery
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub urn: String,
    pub usn: String,
    pub server: Option<String>,
}

/// SSDP client bound to an ephemeral local port
pub(crate) struct SsdpClient {
    socket: UdpSocket,
    target: SocketAddr,
}

impl SsdpClient {
    /// Create a new SSDP client sending to `target` (normally the SSDP multicast group)
    pub fn new(target: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.set_multicast_loop_v4(true)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

        Ok(Self { socket, target })
    }

    /// Send an M-SEARCH request and return an iterator of responses arriving before `window` elapses
    pub fn search(&self, search_target: &str, window: Duration) -> Result<SsdpResponseIterator<'_>> {
        let mx = window.as_secs().clamp(1, 5);
        let request = format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: {}\r\n\
             ST: {}\r\n\
             USER-AGENT: rxv-sdk/0.1 UPnP/1.0\r\n\
             \r\n",
            mx, search_target
        );

        let deadline = Instant::now() + window;
        self.socket.send_to(request.as_bytes(), self.target)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

        Ok(SsdpResponseIterator::new(&self.socket, deadline))
    }
}

/// Iterator over SSDP responses, in arrival order, until the deadline
pub(crate) struct SsdpResponseIterator<'a> {
    socket: &'a UdpSocket,
    buffer: [u8; 2048],
    deadline: Instant,
    finished: bool,
}

impl<'a> SsdpResponseIterator<'a> {
    fn new(socket: &'a UdpSocket, deadline: Instant) -> Self {
        Self {
            socket,
            buffer: [0; 2048],
            deadline,
            finished: false,
        }
    }
}

impl<'a> Iterator for SsdpResponseIterator<'a> {
    type Item = Result<SsdpResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let remaining = self.deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                self.finished = true;
                break;
            }

            if let Err(e) = self.socket.set_read_timeout(Some(remaining)) {
                self.finished = true;
                return Some(Err(DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e))));
            }

            match self.socket.recv_from(&mut self.buffer) {
                Ok((size, _)) => {
                    // Unparseable datagrams are skipped
                    if let Ok(text) = std::str::from_utf8(&self.buffer[..size]) {
                        if let Some(response) = parse_ssdp_response(text) {
                            return Some(Ok(response));
                        }
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(DiscoveryError::NetworkError(format!("Socket error: {}", e))));
                }
            }
        }
        None
    }
}

/// Parse an SSDP response from HTTP text
pub(crate) fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut urn = None;
    let mut usn = None;
    let mut server = None;

    for line in response.lines() {
        let line = line.trim();

        if let Some(value) = extract_header_value(line, "LOCATION:") {
            location = Some(value);
        } else if let Some(value) = extract_header_value(line, "ST:") {
            urn = Some(value);
        } else if let Some(value) = extract_header_value(line, "USN:") {
            usn = Some(value);
        } else if let Some(value) = extract_header_value(line, "SERVER:") {
            server = Some(value);
        }
    }

    match (location, urn, usn) {
        (Some(location), Some(urn), Some(usn)) => Some(SsdpResponse {
            location,
            urn,
            usn,
            server,
        }),
        _ => None,
    }
}

/// Extract header value from a line like "HEADER: value"
fn extract_header_value(line: &str, header: &str) -> Option<String> {
    let name = line.get(..header.len())?;
    let value = line.get(header.len()..)?;
    if !value.is_empty() && name.eq_ignore_ascii_case(header) {
        Some(value.trim().to_string())
    } else {
        None
    }
}
