//! Per-receiver session: normalized reads and writes with a state cache
//!
//! All vendor calls for one receiver go through a single lock, so concurrent
//! callers never interleave a write with a read of the same receiver.

use std::time::Duration;

use parking_lot::Mutex;
use rxv_api::{ApiError, VendorClient};

use crate::state::DeviceState;
use crate::volume::VolumeRange;
use crate::{Result, SdkError};

/// Default wait after a power command before reads are trusted
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_secs(2);

/// Stateful handle for one receiver
///
/// Every vendor failure surfaces as [`SdkError::DeviceUnreachable`]. Nothing
/// is retried.
pub struct DeviceSession<V: VendorClient> {
    vendor: V,
    range: VolumeRange,
    settle: Duration,
    state: Mutex<DeviceState>,
}

impl<V: VendorClient> DeviceSession<V> {
    pub fn new(vendor: V, range: VolumeRange) -> Self {
        Self {
            vendor,
            range,
            settle: DEFAULT_SETTLE_DURATION,
            state: Mutex::new(DeviceState::default()),
        }
    }

    /// Override the settle delay; zero disables it
    pub fn with_settle_duration(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn settle_duration(&self) -> Duration {
        self.settle
    }

    pub fn volume_range(&self) -> VolumeRange {
        self.range
    }

    pub fn get_power(&self) -> Result<bool> {
        let mut state = self.state.lock();
        let on = self.vendor.power().map_err(unreachable)?;
        state.power = on;
        Ok(on)
    }

    /// Send a power command, then block for the settle duration
    ///
    /// The session stays locked while settling, so no other call observes
    /// the receiver mid-transition.
    pub fn set_power(&self, on: bool) -> Result<()> {
        let mut state = self.state.lock();
        self.vendor.set_power(on).map_err(unreachable)?;
        state.power = on;
        tracing::info!(on, settle_ms = self.settle.as_millis() as u64, "power command sent");

        if !self.settle.is_zero() {
            std::thread::sleep(self.settle);
        }
        Ok(())
    }

    /// Current volume as a level in `[0, 1]` for values inside the range
    pub fn get_volume(&self) -> Result<f64> {
        let mut state = self.state.lock();
        let db = self.vendor.volume_db().map_err(unreachable)?;
        state.volume_native = db;
        Ok(self.range.normalize(db))
    }

    /// Write a level: denormalize, truncate to whole dB, send
    pub fn set_volume(&self, level: f64) -> Result<()> {
        let mut state = self.state.lock();
        let db = self.range.to_native(level);
        tracing::debug!(level, db, "setting volume");
        self.vendor.set_volume_db(db).map_err(unreachable)?;
        state.volume_native = db;
        Ok(())
    }

    pub fn get_muted(&self) -> Result<bool> {
        let mut state = self.state.lock();
        let muted = self.vendor.muted().map_err(unreachable)?;
        state.muted = muted;
        Ok(muted)
    }

    pub fn set_muted(&self, muted: bool) -> Result<()> {
        let mut state = self.state.lock();
        self.vendor.set_muted(muted).map_err(unreachable)?;
        state.muted = muted;
        Ok(())
    }

    pub fn get_model_name(&self) -> Result<String> {
        let mut state = self.state.lock();
        let model = self.vendor.model_name().map_err(unreachable)?;
        state.model_name = model.clone();
        Ok(model)
    }

    pub fn get_thumbnail_url(&self) -> Option<String> {
        let mut state = self.state.lock();
        let url = self.vendor.small_image_url();
        state.thumbnail_url = url.clone();
        url
    }

    /// Read power, volume, mute and input in one request
    pub fn refresh(&self) -> Result<DeviceState> {
        let mut state = self.state.lock();
        let status = self.vendor.basic_status().map_err(unreachable)?;
        state.power = status.power.is_on();
        state.volume_native = status.volume_db;
        state.muted = status.muted;
        state.input = status.input;
        if state.thumbnail_url.is_none() {
            state.thumbnail_url = self.vendor.small_image_url();
        }
        Ok(state.clone())
    }

    /// Last known state, without contacting the receiver
    pub fn cached_state(&self) -> DeviceState {
        self.state.lock().clone()
    }
}

fn unreachable(err: ApiError) -> SdkError {
    tracing::warn!(error = %err, "receiver call failed");
    SdkError::DeviceUnreachable(err)
}
