//! Error types for the discovery system.

use std::fmt;

/// Error type for discovery operations.
///
/// Represents the failure modes of a scan: socket problems, malformed
/// description documents, unusable endpoints and an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Network-related errors (socket creation, sending the M-SEARCH, etc.)
    NetworkError(String),
    /// Parsing errors (description XML, SSDP response, etc.)
    ParseError(String),
    /// A configured or advertised control URL is not usable
    InvalidEndpoint(String),
    /// The scan window elapsed without a usable receiver
    NoDeviceFound,
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DiscoveryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DiscoveryError::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {}", msg),
            DiscoveryError::NoDeviceFound => write!(f, "No receiver found on the network"),
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
