//! Mute write for the main zone

use control_client::Command;
use xmltree::Element;

use crate::operation::RxvOperation;
use crate::{ApiError, Zone};

/// PUT on Main_Zone/Volume/Mute
pub struct SetMuteOperation;

/// Request for the mute operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetMuteRequest {
    pub muted: bool,
}

impl RxvOperation for SetMuteOperation {
    type Request = SetMuteRequest;
    type Response = ();

    const ZONE: Zone = Zone::MainZone;
    const COMMAND: Command = Command::Put;
    const NAME: &'static str = "SetMute";

    fn build_payload(request: &Self::Request) -> String {
        let value = if request.muted { "On" } else { "Off" };
        format!("<Volume><Mute>{}</Mute></Volume>", value)
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_payloads() {
        assert_eq!(
            SetMuteOperation::payload(&SetMuteRequest { muted: true }),
            "<Main_Zone><Volume><Mute>On</Mute></Volume></Main_Zone>"
        );
        assert_eq!(
            SetMuteOperation::build_payload(&SetMuteRequest { muted: false }),
            "<Volume><Mute>Off</Mute></Volume>"
        );
    }
}
