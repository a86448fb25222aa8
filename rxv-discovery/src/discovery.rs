//! Core discovery logic.
//!
//! A scan:
//! 1. Sends one SSDP M-SEARCH for MediaRenderer devices
//! 2. Collects responses until the scan window has fully elapsed
//! 3. Fetches each distinct description document via HTTP
//! 4. Keeps devices exposing the Yamaha remote control service, in arrival order

use std::collections::HashSet;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use crate::device::DeviceDescription;
use crate::error::{DiscoveryError, Result};
use crate::ssdp::{SsdpClient, SsdpResponse};
use crate::DeviceEndpoint;

/// SSDP multicast group and port
pub const SSDP_MULTICAST_ADDR: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(239, 255, 255, 250), 1900);

/// Search target answered by Yamaha network receivers
pub const MEDIA_RENDERER_TARGET: &str = "urn:schemas-upnp-org:device:MediaRenderer:1";

/// Source of candidate endpoints.
///
/// Implemented by [`Discovery`]; registration code depends on this trait so
/// that it can be exercised without a network.
pub trait Discover {
    /// Scan for `timeout` and return endpoints in response arrival order.
    ///
    /// Returns `DiscoveryError::NoDeviceFound` when the scan yields nothing.
    fn discover(&self, timeout: Duration) -> Result<Vec<DeviceEndpoint>>;
}

/// Configurable SSDP scanner for Yamaha receivers
#[derive(Debug, Clone)]
pub struct Discovery {
    multicast_addr: SocketAddr,
    search_target: String,
}

impl Discovery {
    /// Scanner targeting the standard SSDP multicast group
    pub fn new() -> Self {
        Self {
            multicast_addr: SocketAddr::V4(SSDP_MULTICAST_ADDR),
            search_target: MEDIA_RENDERER_TARGET.to_string(),
        }
    }

    /// Send the M-SEARCH to a different address (a unicast responder, for instance)
    pub fn with_multicast_addr(mut self, addr: SocketAddr) -> Self {
        self.multicast_addr = addr;
        self
    }

    /// Override the SSDP search target
    pub fn with_search_target(mut self, target: impl Into<String>) -> Self {
        self.search_target = target.into();
        self
    }

    fn collect_responses(&self, timeout: Duration) -> Result<Vec<SsdpResponse>> {
        let client = SsdpClient::new(self.multicast_addr)?;
        let mut seen_locations = HashSet::new();
        let mut responses = Vec::new();

        for result in client.search(&self.search_target, timeout)? {
            match result {
                Ok(response) => {
                    // Receivers often answer more than once
                    if seen_locations.insert(response.location.clone()) {
                        responses.push(response);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "SSDP scan interrupted");
                    break;
                }
            }
        }

        Ok(responses)
    }

    fn fetch_description(http_client: &reqwest::blocking::Client, location: &str) -> Result<DeviceDescription> {
        let xml = http_client
            .get(location)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to fetch device description: {}", e)))?;

        DeviceDescription::from_xml(&xml, location)
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new()
    }
}

impl Discover for Discovery {
    fn discover(&self, timeout: Duration) -> Result<Vec<DeviceEndpoint>> {
        let responses = self.collect_responses(timeout)?;
        tracing::debug!(count = responses.len(), "SSDP scan finished");

        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout.max(Duration::from_secs(1)))
            .build()
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        let mut endpoints = Vec::new();
        for response in &responses {
            let description = match Self::fetch_description(&http_client, &response.location) {
                Ok(desc) => desc,
                Err(e) => {
                    tracing::warn!(location = %response.location, error = %e, "skipping candidate");
                    continue;
                }
            };

            match description.to_endpoint() {
                Some(endpoint) => {
                    tracing::info!(
                        control_url = %endpoint.control_url,
                        model = ?endpoint.model_name,
                        "found receiver"
                    );
                    endpoints.push(endpoint);
                }
                None => {
                    tracing::debug!(location = %response.location, "not a Yamaha receiver");
                }
            }
        }

        if endpoints.is_empty() {
            return Err(DiscoveryError::NoDeviceFound);
        }
        Ok(endpoints)
    }
}
