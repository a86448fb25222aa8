//! Volume level write for the main zone

use control_client::Command;
use xmltree::Element;

use crate::operation::RxvOperation;
use crate::{ApiError, Zone};

/// PUT on Main_Zone/Volume/Lvl
///
/// The level travels as a tenth-of-dB integer with `Exp` 1, so -42.0 dB is
/// sent as `<Val>-420</Val>`.
pub struct SetVolumeOperation;

/// Request for the volume operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetVolumeRequest {
    /// Target level in dB
    pub db: f64,
}

impl SetVolumeRequest {
    /// Level in tenths of a dB as written on the wire
    pub fn wire_value(&self) -> i32 {
        (self.db * 10.0).round() as i32
    }
}

impl RxvOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = ();

    const ZONE: Zone = Zone::MainZone;
    const COMMAND: Command = Command::Put;
    const NAME: &'static str = "SetVolume";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume>",
            request.wire_value()
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
