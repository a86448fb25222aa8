use std::time::Duration;

use control_client::{HttpTransport, TransportClient};
use parking_lot::Mutex;
use rxv_discovery::DeviceEndpoint;
use url::Url;

use crate::operation::RxvOperation;
use crate::operations::{
    BasicStatus, GetBasicStatusOperation, GetConfigOperation, PowerState, SetMuteOperation,
    SetMuteRequest, SetPowerOperation, SetPowerRequest, SetVolumeOperation, SetVolumeRequest,
};
use crate::{ApiError, Result, VendorClient};

/// Port the receiver's embedded web server publishes its icons on
const ICON_PORT: u16 = 8080;

/// A client for executing receiver operations against one device
///
/// This client bridges the gap between the stateless operation definitions
/// and the transport that carries them. It is generic over the transport so
/// the same code runs against a real receiver and against
/// [`SimulatedReceiver`](crate::testing::SimulatedReceiver).
///
/// ```rust,no_run
/// use rxv_api::{RxvClient, VendorClient};
///
/// let client = RxvClient::http("http://192.168.1.116/YamahaRemoteControl/ctrl");
/// let on = client.power()?;
/// # Ok::<(), rxv_api::ApiError>(())
/// ```
#[derive(Debug)]
pub struct RxvClient<T: TransportClient = HttpTransport> {
    transport: T,
    control_url: String,
    model_name: Mutex<Option<String>>,
}

impl RxvClient<HttpTransport> {
    /// Create an HTTP-backed client with default timeouts
    pub fn http(control_url: &str) -> Self {
        Self::new(HttpTransport::new(control_url), control_url)
    }

    /// Create an HTTP-backed client for a resolved endpoint.
    ///
    /// A model name learned during discovery is reused instead of being
    /// queried again.
    pub fn from_endpoint(endpoint: &DeviceEndpoint, connect_timeout: Duration, read_timeout: Duration) -> Self {
        let transport = HttpTransport::with_timeouts(&endpoint.control_url, connect_timeout, read_timeout);
        let client = Self::new(transport, &endpoint.control_url);
        match &endpoint.model_name {
            Some(model) => client.with_model_name(model.clone()),
            None => client,
        }
    }
}

impl<T: TransportClient> RxvClient<T> {
    /// Create a client over any transport; `control_url` is used to derive the host
    pub fn new(transport: T, control_url: impl Into<String>) -> Self {
        Self {
            transport,
            control_url: control_url.into(),
            model_name: Mutex::new(None),
        }
    }

    /// Seed the model name so it is not queried from the receiver
    pub fn with_model_name(self, model_name: impl Into<String>) -> Self {
        *self.model_name.lock() = Some(model_name.into());
        self
    }

    pub fn control_url(&self) -> &str {
        &self.control_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute an operation against the receiver
    ///
    /// Builds the payload, sends it through the transport and parses the
    /// response. No retries are attempted.
    pub fn execute<Op: RxvOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let payload = Op::payload(request);
        tracing::debug!(operation = Op::NAME, url = %self.control_url, "executing");

        let xml = self
            .transport
            .send_command(Op::COMMAND, &payload)
            .map_err(|e| {
                tracing::debug!(operation = Op::NAME, error = %e, "operation failed");
                ApiError::from(e)
            })?;

        Op::parse_response(&xml)
    }
}

impl<T: TransportClient> VendorClient for RxvClient<T> {
    fn basic_status(&self) -> Result<BasicStatus> {
        self.execute::<GetBasicStatusOperation>(&())
    }

    fn set_power(&self, on: bool) -> Result<()> {
        self.execute::<SetPowerOperation>(&SetPowerRequest {
            power: PowerState::from_on(on),
        })
    }

    fn set_volume_db(&self, db: f64) -> Result<()> {
        if !db.is_finite() {
            return Err(ApiError::InvalidParameter(format!("volume {} dB is not a number", db)));
        }
        self.execute::<SetVolumeOperation>(&SetVolumeRequest { db })
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        self.execute::<SetMuteOperation>(&SetMuteRequest { muted })
    }

    fn model_name(&self) -> Result<String> {
        if let Some(model) = self.model_name.lock().clone() {
            return Ok(model);
        }

        let model = self.execute::<GetConfigOperation>(&())?.model_name;
        *self.model_name.lock() = Some(model.clone());
        Ok(model)
    }

    fn small_image_url(&self) -> Option<String> {
        let url = Url::parse(&self.control_url).ok()?;
        let host = url.host_str()?;
        Some(format!("http://{}:{}/BCO_device_sm_icon.png", host, ICON_PORT))
    }
}
