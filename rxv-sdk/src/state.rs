use serde::{Deserialize, Serialize};

/// Last known state of a receiver
///
/// Updated after every successful vendor call; nothing is guaranteed about
/// staleness beyond "most recent successful read or write".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceState {
    pub power: bool,
    /// Volume in dB
    pub volume_native: f64,
    pub muted: bool,
    pub model_name: String,
    pub thumbnail_url: Option<String>,
    /// Selected input, e.g. "HDMI1"
    pub input: Option<String>,
}
