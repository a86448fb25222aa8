//! Host-facing control surface for one registered receiver

use rxv_api::{RxvClient, VendorClient};
use serde::{Deserialize, Serialize};

use crate::session::DeviceSession;
use crate::state::DeviceState;
use crate::{Result, SdkError};

/// Power state as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaState {
    On,
    Off,
}

/// Commands the host may offer for this device
///
/// Fixed for RX-V receivers, never probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    pub volume_set: bool,
    pub volume_mute: bool,
    pub turn_on: bool,
    pub turn_off: bool,
}

impl Capabilities {
    pub const RECEIVER: Capabilities = Capabilities {
        volume_set: true,
        volume_mute: true,
        turn_on: true,
        turn_off: true,
    };
}

/// A registered receiver
///
/// Nothing is cached between calls except what [`DeviceSession`] keeps;
/// `state()` always asks the receiver.
///
/// ```rust,no_run
/// use rxv_sdk::{register_device, MediaState};
///
/// let receiver = register_device("Living Room", Some("http://192.168.1.116/YamahaRemoteControl/ctrl"))?;
/// if receiver.state()? == MediaState::Off {
///     receiver.turn_on()?;
/// }
/// receiver.set_volume(0.4)?;
/// # Ok::<(), rxv_sdk::SdkError>(())
/// ```
pub struct Receiver<V: VendorClient = RxvClient> {
    name: String,
    session: DeviceSession<V>,
}

impl<V: VendorClient> Receiver<V> {
    pub fn new(name: impl Into<String>, session: DeviceSession<V>) -> Self {
        Self {
            name: name.into(),
            session,
        }
    }

    /// Configured name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::RECEIVER
    }

    pub fn state(&self) -> Result<MediaState> {
        Ok(if self.session.get_power()? {
            MediaState::On
        } else {
            MediaState::Off
        })
    }

    /// Power on and wait for the receiver to settle
    pub fn turn_on(&self) -> Result<()> {
        tracing::info!(receiver = %self.name, "turning on");
        self.session.set_power(true)
    }

    pub fn turn_off(&self) -> Result<()> {
        tracing::info!(receiver = %self.name, "turning off");
        self.session.set_power(false)
    }

    /// Normalized volume level
    pub fn volume(&self) -> Result<f64> {
        self.session.get_volume()
    }

    /// Set the volume level; finite input is clamped to `[0, 1]`
    pub fn set_volume(&self, level: f64) -> Result<()> {
        if !level.is_finite() {
            return Err(SdkError::InvalidVolume(level));
        }
        self.session.set_volume(level.clamp(0.0, 1.0))
    }

    pub fn is_muted(&self) -> Result<bool> {
        self.session.get_muted()
    }

    pub fn mute(&self, muted: bool) -> Result<()> {
        self.session.set_muted(muted)
    }

    pub fn model_name(&self) -> Result<String> {
        self.session.get_model_name()
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        self.session.get_thumbnail_url()
    }

    /// Read the receiver's status into the session cache
    pub fn refresh(&self) -> Result<DeviceState> {
        self.session.refresh()
    }

    pub fn session(&self) -> &DeviceSession<V> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::VolumeRange;
    use rstest::rstest;
    use rxv_api::testing::SimulatedReceiver;
    use std::sync::Arc;
    use std::time::Duration;

    fn receiver() -> (Arc<SimulatedReceiver>, Receiver<RxvClient<Arc<SimulatedReceiver>>>) {
        let sim = Arc::new(SimulatedReceiver::new());
        let client = RxvClient::new(Arc::clone(&sim), "http://192.168.1.116/YamahaRemoteControl/ctrl");
        let session = DeviceSession::new(client, VolumeRange::default()).with_settle_duration(Duration::ZERO);
        (sim, Receiver::new("Living Room", session))
    }

    #[test]
    fn test_turn_on_and_off() {
        let (sim, receiver) = receiver();
        assert_eq!(receiver.state().unwrap(), MediaState::Off);

        receiver.turn_on().unwrap();
        assert!(sim.power());
        assert_eq!(receiver.state().unwrap(), MediaState::On);

        receiver.turn_off().unwrap();
        assert_eq!(receiver.state().unwrap(), MediaState::Off);
    }

    #[rstest]
    #[case(1.7, -50)]
    #[case(-0.3, -800)]
    #[case(0.5, -420)]
    fn test_set_volume_clamps(#[case] level: f64, #[case] expected_val: i32) {
        let (sim, receiver) = receiver();
        receiver.set_volume(level).unwrap();
        assert_eq!(sim.volume_val(), expected_val);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_set_volume_rejects_non_finite(#[case] level: f64) {
        let (sim, receiver) = receiver();
        assert!(matches!(receiver.set_volume(level), Err(SdkError::InvalidVolume(_))));
        assert_eq!(sim.request_count(), 0);
    }

    #[test]
    fn test_static_properties() {
        let (sim, receiver) = receiver();
        assert_eq!(receiver.name(), "Living Room");
        assert_eq!(receiver.capabilities(), Capabilities::RECEIVER);
        assert_eq!(
            receiver.thumbnail_url().as_deref(),
            Some("http://192.168.1.116:8080/BCO_device_sm_icon.png")
        );
        assert_eq!(sim.request_count(), 0);
    }

    #[test]
    fn test_mute() {
        let (_sim, receiver) = receiver();
        receiver.mute(true).unwrap();
        assert!(receiver.is_muted().unwrap());
    }

    #[test]
    fn test_unreachable_state() {
        let (sim, receiver) = receiver();
        sim.set_reachable(false);
        assert!(matches!(receiver.state(), Err(SdkError::DeviceUnreachable(_))));
    }
}
