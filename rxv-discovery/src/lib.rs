//! Yamaha receiver discovery library
//!
//! Locates Yamaha network receivers on the local network using SSDP and the
//! UPnP description documents they publish. Used when no control URL is
//! configured.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use rxv_discovery::{discover, select_endpoint, SelectionPolicy};
//!
//! let candidates = discover(Duration::from_secs(2))?;
//! let endpoint = select_endpoint(&candidates, &SelectionPolicy::FirstResponder)?;
//! println!("Controlling {}", endpoint.control_url);
//! # Ok::<(), rxv_discovery::DiscoveryError>(())
//! ```

mod error;
mod ssdp;
pub mod device;
mod discovery;
mod selection;

pub use device::DeviceEndpoint;
pub use discovery::{Discover, Discovery, MEDIA_RENDERER_TARGET, SSDP_MULTICAST_ADDR};
pub use error::{DiscoveryError, Result};
pub use selection::{select_endpoint, SelectionPolicy};

use std::time::Duration;

/// Default scan window
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Scan the local network for `timeout` and return receivers in arrival order.
///
/// Returns `DiscoveryError::NoDeviceFound` once the window has elapsed
/// without a usable receiver.
pub fn discover(timeout: Duration) -> Result<Vec<DeviceEndpoint>> {
    Discovery::new().discover(timeout)
}
