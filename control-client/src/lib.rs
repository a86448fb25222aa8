//! Private control client for Yamaha receiver communication
//!
//! This crate provides a minimal client for the `YAMAHA_AV` remote control
//! protocol spoken by RX-V network receivers: an XML document POSTed to the
//! receiver's control URL, answered with an XML document carrying a response
//! code. Higher layers only see the [`TransportClient`] trait, so the HTTP
//! implementation can be swapped for an in-memory one in tests.

mod error;

pub use error::TransportError;

use std::sync::Arc;
use std::time::Duration;
use xmltree::Element;

/// Root element name of every request and response document
pub const ROOT_ELEMENT: &str = "YAMAHA_AV";

/// Request kind carried in the `cmd` attribute of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Read parameters (`cmd="GET"`)
    Get,
    /// Write parameters (`cmd="PUT"`)
    Put,
}

impl Command {
    /// Wire value of the `cmd` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Get => "GET",
            Command::Put => "PUT",
        }
    }
}

/// Capability to exchange one control request with a receiver.
///
/// `payload` is the inner XML of the `YAMAHA_AV` envelope, for example
/// `<Main_Zone><Basic_Status>GetParam</Basic_Status></Main_Zone>`. On success
/// the parsed `YAMAHA_AV` response root is returned. Implementations must not
/// retry on their own.
pub trait TransportClient: Send + Sync {
    fn send_command(&self, command: Command, payload: &str) -> Result<Element, TransportError>;
}

impl<T: TransportClient + ?Sized> TransportClient for Arc<T> {
    fn send_command(&self, command: Command, payload: &str) -> Result<Element, TransportError> {
        (**self).send_command(command, payload)
    }
}

impl<T: TransportClient + ?Sized> TransportClient for Box<T> {
    fn send_command(&self, command: Command, payload: &str) -> Result<Element, TransportError> {
        (**self).send_command(command, payload)
    }
}

/// HTTP implementation of [`TransportClient`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    control_url: String,
}

impl HttpTransport {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a transport for a control URL with default timeouts
    pub fn new(control_url: impl Into<String>) -> Self {
        Self::with_timeouts(
            control_url,
            Self::DEFAULT_CONNECT_TIMEOUT,
            Self::DEFAULT_READ_TIMEOUT,
        )
    }

    /// Create a transport with explicit connect and read timeouts
    pub fn with_timeouts(
        control_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect_timeout)
                .timeout_read(read_timeout)
                .build(),
            control_url: control_url.into(),
        }
    }

    /// The control URL requests are POSTed to
    pub fn control_url(&self) -> &str {
        &self.control_url
    }
}

impl TransportClient for HttpTransport {
    fn send_command(&self, command: Command, payload: &str) -> Result<Element, TransportError> {
        let body = build_envelope(command, payload);
        tracing::debug!(url = %self.control_url, cmd = command.as_str(), "sending control request");

        let response = self
            .agent
            .post(&self.control_url)
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => TransportError::Status(code),
                ureq::Error::Transport(t) => TransportError::Network(t.to_string()),
            })?;

        let xml_text = response
            .into_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let xml = Element::parse(xml_text.as_bytes())
            .map_err(|e| TransportError::Parse(e.to_string()))?;

        extract_response(xml)
    }
}

/// Wrap a payload in the `YAMAHA_AV` request envelope
pub fn build_envelope(command: Command, payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><{root} cmd="{cmd}">{payload}</{root}>"#,
        root = ROOT_ELEMENT,
        cmd = command.as_str(),
        payload = payload
    )
}

/// Validate a response root and its response code
pub fn extract_response(xml: Element) -> Result<Element, TransportError> {
    if xml.name != ROOT_ELEMENT {
        return Err(TransportError::Parse(format!(
            "Expected {} root, found {}",
            ROOT_ELEMENT, xml.name
        )));
    }

    match xml.attributes.get("RC").map(|rc| rc.trim()) {
        None | Some("0") => Ok(xml),
        Some(code) => Err(TransportError::Rejected(code.parse::<u16>().unwrap_or(u16::MAX))),
    }
}
