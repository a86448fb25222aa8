//! Configuration for a registered receiver
//!
//! Every field has a default, so a config file only needs the values that
//! differ:
//!
//! ```json
//! { "name": "Living Room", "url": "http://192.168.1.116/YamahaRemoteControl/ctrl" }
//! ```

use std::path::Path;
use std::time::Duration;

use rxv_discovery::SelectionPolicy;
use serde::{Deserialize, Serialize};

use crate::volume::{VolumeRange, DEFAULT_MAX_DB, DEFAULT_MIN_DB};
use crate::{Result, SdkError};

/// Name reported when none is configured
pub const DEFAULT_NAME: &str = "Yamaha";

/// Configuration for one receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Name reported to the host
    /// Default: "Yamaha"
    pub name: String,

    /// Control URL; discovery runs when absent or empty
    /// Default: none
    pub url: Option<String>,

    /// Wait after a power command before reads are trusted
    /// Default: 2000 ms
    pub settle_duration_ms: u64,

    /// SSDP scan window
    /// Default: 2000 ms
    pub discovery_timeout_ms: u64,

    /// Default: 5000 ms
    pub connect_timeout_ms: u64,

    /// Default: 10000 ms
    pub read_timeout_ms: u64,

    /// Volume mapped to level 0.0
    /// Default: -80.5 dB
    pub volume_min_db: f64,

    /// Volume mapped to level 1.0
    /// Default: -5.0 dB
    pub volume_max_db: f64,

    /// Which discovered receiver to use
    /// Default: first responder
    pub selection: SelectionPolicy,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            url: None,
            settle_duration_ms: 2000,
            discovery_timeout_ms: 2000,
            connect_timeout_ms: 5000,
            read_timeout_ms: 10_000,
            volume_min_db: DEFAULT_MIN_DB,
            volume_max_db: DEFAULT_MAX_DB,
            selection: SelectionPolicy::FirstResponder,
        }
    }
}

impl DeviceConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SdkError::Config(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Defaults overridden by `RXV_NAME` and `RXV_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup("RXV_NAME").filter(|n| !n.trim().is_empty()) {
            config.name = name;
        }
        config.url = lookup("RXV_URL").filter(|u| !u.trim().is_empty());
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        if self.volume_min_db >= self.volume_max_db {
            return Err(SdkError::Config(
                "Invalid volume range: min must be less than max".to_string(),
            ));
        }

        if self.explicit_url().is_none() && self.discovery_timeout_ms == 0 {
            return Err(SdkError::Config(
                "Discovery timeout must be greater than 0".to_string(),
            ));
        }

        VolumeRange::new(self.volume_min_db, self.volume_max_db)?;
        Ok(())
    }

    /// Control URL if one is configured and non-empty
    pub fn explicit_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn volume_range(&self) -> Result<VolumeRange> {
        VolumeRange::new(self.volume_min_db, self.volume_max_db)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_settle_duration(mut self, settle: Duration) -> Self {
        self.settle_duration_ms = duration_ms(settle);
        self
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout_ms = duration_ms(timeout);
        self
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
