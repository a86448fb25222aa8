//! Error types for the control client

use thiserror::Error;

/// Errors that can occur while talking to a receiver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, timeout or I/O failure
    #[error("Network error: {0}")]
    Network(String),

    /// The HTTP server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body was not a valid YAMAHA_AV document
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// The receiver answered with a non-zero response code
    #[error("Receiver rejected command: response code {0}")]
    Rejected(u16),
}
