//! Device description parsing and endpoint resolution.
//!
//! Yamaha receivers advertise themselves as UPnP MediaRenderers. Their
//! description document carries a vendor extension block
//! (`yamaha:X_device`) naming the remote control service; the control URL is
//! the extension's `X_URLBase` joined with the service's `X_controlURL`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;
use xmltree::Element;

use crate::error::{DiscoveryError, Result};

/// Spec type of the remote control service in the Yamaha extension block
const REMOTE_CONTROL_SPEC: &str = "X_YamahaRemoteControl";

/// A resolved control endpoint for one receiver.
///
/// Immutable once created, either from explicit configuration or from a
/// discovery result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEndpoint {
    /// URL control requests are POSTed to, e.g. `http://192.168.1.116:80/YamahaRemoteControl/ctrl`
    pub control_url: String,
    /// `true` when the endpoint came from configuration rather than discovery
    pub explicit: bool,
    /// Model name from the description document (e.g. "RX-V673")
    pub model_name: Option<String>,
    /// Friendly name from the description document
    pub friendly_name: Option<String>,
    /// Unique device name (UDN)
    pub udn: Option<String>,
}

impl DeviceEndpoint {
    /// Build an endpoint from a configured control URL.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidEndpoint` unless `control_url` is an
    /// absolute `http` or `https` URL with a host.
    pub fn explicit(control_url: &str) -> Result<Self> {
        let control_url = control_url.trim();
        let parsed = Url::parse(control_url)
            .map_err(|e| DiscoveryError::InvalidEndpoint(format!("{}: {}", control_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DiscoveryError::InvalidEndpoint(format!(
                "{}: expected an http(s) URL with a host",
                control_url
            )));
        }

        Ok(Self {
            control_url: control_url.to_string(),
            explicit: true,
            model_name: None,
            friendly_name: None,
            udn: None,
        })
    }

    /// Host part of the control URL
    pub fn host(&self) -> Option<String> {
        extract_host_from_url(&self.control_url)
    }
}

/// Parsed UPnP description document of a candidate device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescription {
    pub device_type: String,
    pub friendly_name: String,
    pub manufacturer: String,
    pub model_name: String,
    pub udn: String,
    /// Resolved remote control URL, when the Yamaha extension block is present
    pub control_url: Option<String>,
}

impl DeviceDescription {
    /// Parse a description document fetched from `location`.
    ///
    /// `location` is used to resolve the control URL when the extension block
    /// carries no `X_URLBase`.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::ParseError` if the XML is malformed or has no
    /// `device` element.
    pub fn from_xml(xml: &str, location: &str) -> Result<Self> {
        let root = Element::parse(xml.as_bytes())
            .map_err(|e| DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e)))?;

        let device = root
            .get_child("device")
            .ok_or_else(|| DiscoveryError::ParseError("Missing device element".to_string()))?;

        let control_url = root
            .get_child("X_device")
            .or_else(|| device.get_child("X_device"))
            .and_then(|ext| resolve_control_url(ext, location));

        Ok(Self {
            device_type: child_text(device, "deviceType"),
            friendly_name: child_text(device, "friendlyName"),
            manufacturer: child_text(device, "manufacturer"),
            model_name: child_text(device, "modelName"),
            udn: child_text(device, "UDN"),
            control_url,
        })
    }

    /// Whether this device exposes the Yamaha remote control service
    pub fn is_yamaha_receiver(&self) -> bool {
        self.control_url.is_some()
    }

    /// Convert into a discovered endpoint, if the device is controllable
    pub fn to_endpoint(&self) -> Option<DeviceEndpoint> {
        let control_url = self.control_url.clone()?;
        Some(DeviceEndpoint {
            control_url,
            explicit: false,
            model_name: non_empty(&self.model_name),
            friendly_name: non_empty(&self.friendly_name),
            udn: non_empty(&self.udn),
        })
    }
}

fn resolve_control_url(ext: &Element, location: &str) -> Option<String> {
    let services = ext.get_child("X_serviceList")?;
    let control_path = services
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|svc| svc.name == "X_service")
        .find(|svc| {
            svc.get_child("X_specType")
                .and_then(|t| t.get_text())
                .map(|t| t.contains(REMOTE_CONTROL_SPEC))
                .unwrap_or(false)
        })
        .and_then(|svc| svc.get_child("X_controlURL"))
        .and_then(|c| c.get_text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())?;

    let base = ext
        .get_child("X_URLBase")
        .and_then(|b| b.get_text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| location.to_string());

    Url::parse(&base)
        .and_then(|b| b.join(&control_path))
        .map(|u| u.to_string())
        .ok()
}

fn child_text(parent: &Element, name: &str) -> String {
    parent
        .get_child(name)
        .and_then(|c| c.get_text())
        .map(Cow::into_owned)
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Extract the host from a URL.
///
/// Returns `None` if the URL is malformed.
pub fn extract_host_from_url(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(|h| h.to_string())
}
