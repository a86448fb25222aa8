//! Mapping between normalized volume levels and the receiver's dB scale

use serde::{Deserialize, Serialize};

use crate::{Result, SdkError};

/// Lowest volume the receiver accepts, in dB
pub const DEFAULT_MIN_DB: f64 = -80.5;
/// Highest volume exposed to the host, in dB
pub const DEFAULT_MAX_DB: f64 = -5.0;

/// Native volume range the normalized `[0, 1]` level maps onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min_db: f64,
    pub max_db: f64,
}

impl Default for VolumeRange {
    fn default() -> Self {
        Self {
            min_db: DEFAULT_MIN_DB,
            max_db: DEFAULT_MAX_DB,
        }
    }
}

impl VolumeRange {
    /// Create a range, rejecting empty or non-finite bounds
    pub fn new(min_db: f64, max_db: f64) -> Result<Self> {
        if !min_db.is_finite() || !max_db.is_finite() || min_db >= max_db {
            return Err(SdkError::Config(format!(
                "volume range [{}, {}] dB is empty",
                min_db, max_db
            )));
        }
        Ok(Self { min_db, max_db })
    }

    fn span(&self) -> f64 {
        (self.max_db - self.min_db).abs()
    }

    /// Native dB to a level; `min_db` maps to 0.0 and `max_db` to 1.0
    pub fn normalize(&self, db: f64) -> f64 {
        (db - self.min_db) / self.span()
    }

    /// Level to native dB
    pub fn denormalize(&self, level: f64) -> f64 {
        level * self.span() + self.min_db
    }

    /// Round a native value to what gets written: whole dB, truncated toward zero
    pub fn quantize(db: f64) -> f64 {
        db.trunc()
    }

    /// Native dB written for a normalized level
    pub fn to_native(&self, level: f64) -> f64 {
        Self::quantize(self.denormalize(level))
    }
}
