//! # rxv-sdk - control layer for Yamaha RX-V receivers
//!
//! Registers a receiver by name and optional control URL, then exposes a
//! small, synchronous command surface with volume normalized to `[0, 1]`:
//!
//! ```rust,no_run
//! use rxv_sdk::{register_device, MediaState};
//!
//! fn main() -> Result<(), rxv_sdk::SdkError> {
//!     // No URL: scan the network and take the first receiver that answers
//!     let receiver = register_device("Living Room", None)?;
//!
//!     if receiver.state()? == MediaState::Off {
//!         receiver.turn_on()?; // blocks for the settle duration
//!     }
//!     receiver.set_volume(0.5)?; // -42.75 dB, written as -42.0 dB
//!     println!("{} is a {}", receiver.name(), receiver.model_name()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! rxv-sdk (Receiver, DeviceSession, registration)
//!     ↓
//! rxv-api (RxvClient, typed YAMAHA_AV operations)
//!     ↓
//! control-client (TransportClient over HTTP)
//!
//! rxv-discovery (SSDP scan when no URL is configured)
//! ```

pub mod config;
pub mod logging;

mod error;
mod receiver;
mod registration;
mod session;
mod state;
mod volume;

pub use config::DeviceConfig;
pub use error::{Result, SdkError};
pub use receiver::{Capabilities, MediaState, Receiver};
pub use registration::{register_device, register_with_config, register_with_discovery, resolve_endpoint};
pub use session::{DeviceSession, DEFAULT_SETTLE_DURATION};
pub use state::DeviceState;
pub use volume::{VolumeRange, DEFAULT_MAX_DB, DEFAULT_MIN_DB};

pub use rxv_api::{RxvClient, VendorClient};
pub use rxv_discovery::{DeviceEndpoint, Discover, Discovery, SelectionPolicy};
