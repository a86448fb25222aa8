//! Turning a name and an optional control URL into a [`Receiver`]
//!
//! Registration never talks to the receiver itself. With an explicit URL no
//! network access happens at all; without one, a discovery scan picks the
//! endpoint.

use rxv_api::RxvClient;
use rxv_discovery::{select_endpoint, DeviceEndpoint, Discover, Discovery};

use crate::config::DeviceConfig;
use crate::receiver::Receiver;
use crate::session::DeviceSession;
use crate::Result;

/// Register a receiver with default settings
///
/// An absent or empty `endpoint_url` triggers discovery, and the first
/// receiver to answer is used.
pub fn register_device(name: &str, endpoint_url: Option<&str>) -> Result<Receiver> {
    let mut config = DeviceConfig::new(name);
    config.url = endpoint_url.map(str::to_string);
    register_with_config(&config)
}

/// Register a receiver, discovering it on the local network if needed
pub fn register_with_config(config: &DeviceConfig) -> Result<Receiver> {
    register_with_discovery(config, &Discovery::new())
}

/// Register a receiver using `discovery` when no URL is configured
pub fn register_with_discovery(config: &DeviceConfig, discovery: &impl Discover) -> Result<Receiver> {
    config.validate()?;
    let endpoint = resolve_endpoint(config, discovery)?;

    tracing::info!(
        name = %config.name,
        url = %endpoint.control_url,
        explicit = endpoint.explicit,
        "registering receiver"
    );

    let client = RxvClient::from_endpoint(&endpoint, config.connect_timeout(), config.read_timeout());
    let session = DeviceSession::new(client, config.volume_range()?)
        .with_settle_duration(config.settle_duration());

    Ok(Receiver::new(config.name.clone(), session))
}

/// The configured endpoint, or the one chosen from a discovery scan
pub fn resolve_endpoint(config: &DeviceConfig, discovery: &impl Discover) -> Result<DeviceEndpoint> {
    if let Some(url) = config.explicit_url() {
        return Ok(DeviceEndpoint::explicit(url)?);
    }

    tracing::info!(timeout_ms = config.discovery_timeout_ms, "no control URL configured, discovering");
    let candidates = discovery.discover(config.discovery_timeout())?;
    Ok(select_endpoint(&candidates, &config.selection)?)
}
