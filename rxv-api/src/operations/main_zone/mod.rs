//! Main zone operations: status, power, volume and mute

pub mod get_basic_status;
pub mod set_mute;
pub mod set_power;
pub mod set_volume;

pub use get_basic_status::{BasicStatus, GetBasicStatusOperation, PowerState};
pub use set_mute::{SetMuteOperation, SetMuteRequest};
pub use set_power::{SetPowerOperation, SetPowerRequest};
pub use set_volume::{SetVolumeOperation, SetVolumeRequest};
