use control_client::TransportError;
use thiserror::Error;

/// Errors returned by receiver operations
///
/// Separates failures talking to the receiver from responses that arrived
/// but could not be understood.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request could not be exchanged with the receiver
    ///
    /// Covers network failures, timeouts, HTTP errors and non-zero response
    /// codes reported by the receiver.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response parsing error
    ///
    /// The receiver answered, but an expected element was missing or held an
    /// unexpected value.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether the failure happened before a response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
