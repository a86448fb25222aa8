//! High-level API for Yamaha RX-V receiver control
//!
//! This crate provides a type-safe, trait-based API for the receiver's
//! `YAMAHA_AV` protocol. It uses the private `control-client` crate for the
//! low-level request exchange.
//!
//! Each command is a stateless [`RxvOperation`]; [`RxvClient`] executes them
//! and exposes the named commands of [`VendorClient`]:
//!
//! ```rust,no_run
//! use rxv_api::{RxvClient, VendorClient};
//!
//! let client = RxvClient::http("http://192.168.1.116/YamahaRemoteControl/ctrl");
//! client.set_power(true)?;
//! client.set_volume_db(-42.0)?;
//!
//! let status = client.basic_status()?;
//! println!("{} dB, muted: {}", status.volume_db, status.muted);
//! # Ok::<(), rxv_api::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod operation;
pub mod operations;
pub mod vendor;
pub mod zone;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use client::RxvClient;
pub use control_client::{Command, HttpTransport, TransportClient, TransportError};
pub use error::{ApiError, Result};
pub use operation::RxvOperation;
pub use operations::{BasicStatus, PowerState, SystemConfig};
pub use vendor::VendorClient;
pub use zone::Zone;
