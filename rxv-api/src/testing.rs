//! In-memory receiver for tests
//!
//! [`SimulatedReceiver`] implements [`TransportClient`] by interpreting the
//! payloads a real RX-V would receive and answering with the documents it
//! would send back. Power changes can be given a transition delay, during
//! which reads still report the previous state.

use std::time::{Duration, Instant};

use control_client::{extract_response, Command, TransportClient, TransportError, ROOT_ELEMENT};
use parking_lot::Mutex;
use xmltree::Element;

/// Lowest and highest volume the simulated unit accepts, in tenths of a dB
pub const MIN_VOLUME_VAL: i32 = -805;
pub const MAX_VOLUME_VAL: i32 = 165;

/// Response code for a command the unit does not know
const RC_UNKNOWN_COMMAND: u16 = 1;
/// Response code for a value outside what the unit accepts
const RC_BAD_VALUE: u16 = 4;

#[derive(Debug)]
struct State {
    power: bool,
    previous_power: bool,
    power_changed_at: Option<Instant>,
    power_transition: Duration,
    volume_val: i32,
    muted: bool,
    model_name: String,
    input: String,
    reachable: bool,
    requests: Vec<(Command, String)>,
}

impl State {
    fn reported_power(&self) -> bool {
        match self.power_changed_at {
            Some(at) if at.elapsed() < self.power_transition => self.previous_power,
            _ => self.power,
        }
    }
}

/// A receiver that lives in memory
#[derive(Debug)]
pub struct SimulatedReceiver {
    state: Mutex<State>,
}

impl Default for SimulatedReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedReceiver {
    /// Powered off, -40.0 dB, unmuted RX-V673 on HDMI1
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                power: false,
                previous_power: false,
                power_changed_at: None,
                power_transition: Duration::ZERO,
                volume_val: -400,
                muted: false,
                model_name: "RX-V673".to_string(),
                input: "HDMI1".to_string(),
                reachable: true,
                requests: Vec::new(),
            }),
        }
    }

    pub fn with_power(self, on: bool) -> Self {
        {
            let mut state = self.state.lock();
            state.power = on;
            state.previous_power = on;
        }
        self
    }

    pub fn with_volume_db(self, db: f64) -> Self {
        self.state.lock().volume_val = (db * 10.0).round() as i32;
        self
    }

    pub fn with_model_name(self, model_name: impl Into<String>) -> Self {
        self.state.lock().model_name = model_name.into();
        self
    }

    /// Keep reporting the old power state for `delay` after a power change
    pub fn with_power_transition(self, delay: Duration) -> Self {
        self.state.lock().power_transition = delay;
        self
    }

    /// When unreachable every request fails with a network error
    pub fn set_reachable(&self, reachable: bool) {
        self.state.lock().reachable = reachable;
    }

    /// Power state the unit is heading to, ignoring any transition
    pub fn power(&self) -> bool {
        self.state.lock().power
    }

    pub fn volume_val(&self) -> i32 {
        self.state.lock().volume_val
    }

    pub fn is_muted(&self) -> bool {
        self.state.lock().muted
    }

    /// Every command received, in order
    pub fn requests(&self) -> Vec<(Command, String)> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().requests.len()
    }

    fn handle(&self, command: Command, payload: &Element) -> Result<String, TransportError> {
        let mut state = self.state.lock();

        match (command, payload.name.as_str()) {
            (Command::Get, "Main_Zone") if payload.get_child("Basic_Status").is_some() => {
                let mute = if state.muted { "On" } else { "Off" };
                let power = if state.reported_power() { "On" } else { "Standby" };
                Ok(format!(
                    "<Main_Zone><Basic_Status>\
                     <Power_Control><Power>{}</Power><Sleep>Off</Sleep></Power_Control>\
                     <Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>{}</Mute></Volume>\
                     <Input><Input_Sel>{}</Input_Sel></Input>\
                     </Basic_Status></Main_Zone>",
                    power, state.volume_val, mute, state.input
                ))
            }
            (Command::Get, "System") if payload.get_child("Config").is_some() => Ok(format!(
                "<System><Config><Model_Name>{}</Model_Name><System_ID>0B123456</System_ID>\
                 <Version>1.80/2.01</Version></Config></System>",
                state.model_name
            )),
            (Command::Put, "Main_Zone") => {
                if let Some(value) = child_text(payload, &["Power_Control", "Power"]) {
                    let on = match value.as_str() {
                        "On" => true,
                        "Standby" => false,
                        _ => return Err(TransportError::Rejected(RC_BAD_VALUE)),
                    };
                    state.previous_power = state.reported_power();
                    state.power = on;
                    state.power_changed_at = Some(Instant::now());
                } else if let Some(value) = child_text(payload, &["Volume", "Lvl", "Val"]) {
                    let val = value
                        .parse::<i32>()
                        .map_err(|_| TransportError::Rejected(RC_BAD_VALUE))?;
                    state.volume_val = val.clamp(MIN_VOLUME_VAL, MAX_VOLUME_VAL);
                } else if let Some(value) = child_text(payload, &["Volume", "Mute"]) {
                    state.muted = match value.as_str() {
                        "On" => true,
                        "Off" => false,
                        _ => return Err(TransportError::Rejected(RC_BAD_VALUE)),
                    };
                } else {
                    return Err(TransportError::Rejected(RC_UNKNOWN_COMMAND));
                }
                Ok(String::new())
            }
            _ => Err(TransportError::Rejected(RC_UNKNOWN_COMMAND)),
        }
    }
}

impl TransportClient for SimulatedReceiver {
    fn send_command(&self, command: Command, payload: &str) -> Result<Element, TransportError> {
        {
            let mut state = self.state.lock();
            state.requests.push((command, payload.to_string()));
            if !state.reachable {
                return Err(TransportError::Network("simulated receiver is unreachable".to_string()));
            }
        }

        let request = Element::parse(payload.as_bytes())
            .map_err(|_| TransportError::Rejected(RC_UNKNOWN_COMMAND))?;
        let body = self.handle(command, &request)?;

        let document = format!(
            r#"<{root} rsp="{cmd}" RC="0">{body}</{root}>"#,
            root = ROOT_ELEMENT,
            cmd = command.as_str(),
            body = body
        );
        let xml = Element::parse(document.as_bytes()).map_err(|e| TransportError::Parse(e.to_string()))?;
        extract_response(xml)
    }
}

fn child_text(root: &Element, path: &[&str]) -> Option<String> {
    let mut current = root;
    for name in path {
        current = current.get_child(*name)?;
    }
    current.get_text().map(|t| t.trim().to_string())
}
