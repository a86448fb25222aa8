//! System configuration read

use control_client::Command;
use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::{optional_text_at, text_at, RxvOperation};
use crate::{ApiError, Zone};

/// GetParam on System/Config
pub struct GetConfigOperation;

/// Unit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub model_name: String,
    pub system_id: Option<String>,
    pub version: Option<String>,
}

impl RxvOperation for GetConfigOperation {
    type Request = ();
    type Response = SystemConfig;

    const ZONE: Zone = Zone::System;
    const COMMAND: Command = Command::Get;
    const NAME: &'static str = "GetConfig";

    fn build_payload(_request: &Self::Request) -> String {
        "<Config>GetParam</Config>".to_string()
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SystemConfig {
            model_name: text_at(xml, &["System", "Config", "Model_Name"])?,
            system_id: optional_text_at(xml, &["System", "Config", "System_ID"]),
            version: optional_text_at(xml, &["System", "Config", "Version"]),
        })
    }
}
