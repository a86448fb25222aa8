//! Basic_Status read for the main zone

use control_client::Command;
use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::{optional_text_at, text_at, RxvOperation};
use crate::{ApiError, Zone};

/// GetParam on Main_Zone/Basic_Status
pub struct GetBasicStatusOperation;

/// Power flag as reported by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Standby,
}

impl PowerState {
    pub fn from_on(on: bool) -> Self {
        if on {
            PowerState::On
        } else {
            PowerState::Standby
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }

    /// Wire value of the `Power` element
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "On",
            PowerState::Standby => "Standby",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "On" => Ok(PowerState::On),
            "Standby" => Ok(PowerState::Standby),
            other => Err(ApiError::ParseError(format!("Unknown power state '{}'", other))),
        }
    }
}

/// Main zone status snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatus {
    pub power: PowerState,
    /// Volume level in dB
    pub volume_db: f64,
    pub muted: bool,
    /// Selected input, e.g. "HDMI1"
    pub input: Option<String>,
}

impl RxvOperation for GetBasicStatusOperation {
    type Request = ();
    type Response = BasicStatus;

    const ZONE: Zone = Zone::MainZone;
    const COMMAND: Command = Command::Get;
    const NAME: &'static str = "GetBasicStatus";

    fn build_payload(_request: &Self::Request) -> String {
        "<Basic_Status>GetParam</Basic_Status>".to_string()
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let power = PowerState::parse(&text_at(xml, &status_path(&["Power_Control", "Power"]))?)?;
        let val = parse_number::<i32>(&text_at(xml, &status_path(&["Volume", "Lvl", "Val"]))?, "Val")?;
        let exp = match optional_text_at(xml, &status_path(&["Volume", "Lvl", "Exp"])) {
            Some(exp) => parse_number::<i32>(&exp, "Exp")?,
            None => 1,
        };
        let muted = text_at(xml, &status_path(&["Volume", "Mute"]))? == "On";
        let input = optional_text_at(xml, &status_path(&["Input", "Input_Sel"]));

        Ok(BasicStatus {
            power,
            volume_db: f64::from(val) / 10f64.powi(exp),
            muted,
            input,
        })
    }
}

fn status_path<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    ["Main_Zone", "Basic_Status"]
        .into_iter()
        .chain(rest.iter().copied())
        .collect()
}

fn parse_number<T: std::str::FromStr>(value: &str, field: &str) -> Result<T, ApiError> {
    value
        .parse::<T>()
        .map_err(|_| ApiError::ParseError(format!("Invalid {} value '{}'", field, value)))
}
