//! Power write for the main zone

use control_client::Command;
use xmltree::Element;

use super::PowerState;
use crate::operation::RxvOperation;
use crate::{ApiError, Zone};

/// PUT on Main_Zone/Power_Control/Power
pub struct SetPowerOperation;

/// Request for the power operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPowerRequest {
    pub power: PowerState,
}

impl RxvOperation for SetPowerOperation {
    type Request = SetPowerRequest;
    type Response = ();

    const ZONE: Zone = Zone::MainZone;
    const COMMAND: Command = Command::Put;
    const NAME: &'static str = "SetPower";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<Power_Control><Power>{}</Power></Power_Control>",
            request.power.as_str()
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        // The receiver only echoes the element names back
        Ok(())
    }
}
