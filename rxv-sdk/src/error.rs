use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// A vendor call failed; the receiver is treated as unreachable
    #[error("Device unreachable: {0}")]
    DeviceUnreachable(#[source] rxv_api::ApiError),

    #[error("Discovery failed: {0}")]
    Discovery(#[from] rxv_discovery::DiscoveryError),

    #[error("Invalid volume level: {0}")]
    InvalidVolume(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rxv_api::ApiError> for SdkError {
    fn from(err: rxv_api::ApiError) -> Self {
        SdkError::DeviceUnreachable(err)
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
