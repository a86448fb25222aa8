//! Operation framework
//!
//! Every receiver command is a stateless type implementing [`RxvOperation`]:
//! it knows which zone it addresses, whether it reads or writes, how to build
//! its payload and how to pull its result out of the response document.

use control_client::Command;
use xmltree::Element;

use crate::error::ApiError;
use crate::zone::Zone;

/// Base trait for all receiver operations
pub trait RxvOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response;

    /// The zone element the payload is wrapped in
    const ZONE: Zone;

    /// Read (`GET`) or write (`PUT`)
    const COMMAND: Command;

    /// Operation name used in logs
    const NAME: &'static str;

    /// Build the payload that goes inside the zone element
    ///
    /// # Arguments
    /// * `request` - The typed request data
    ///
    /// # Returns
    /// The inner XML, without the zone element or the `YAMAHA_AV` envelope
    fn build_payload(request: &Self::Request) -> String;

    /// Parse the `YAMAHA_AV` response root into the typed response
    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError>;

    /// Full payload handed to the transport
    fn payload(request: &Self::Request) -> String {
        Self::ZONE.wrap(&Self::build_payload(request))
    }
}

/// Follow `path` from `root` and return the trimmed text of the last element
pub(crate) fn text_at(root: &Element, path: &[&str]) -> Result<String, ApiError> {
    let mut current = root;
    for name in path {
        current = current
            .get_child(*name)
            .ok_or_else(|| ApiError::ParseError(format!("Missing {} element", path.join("/"))))?;
    }

    current
        .get_text()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| ApiError::ParseError(format!("Empty {} element", path.join("/"))))
}

/// Like [`text_at`], but a missing element is not an error
pub(crate) fn optional_text_at(root: &Element, path: &[&str]) -> Option<String> {
    text_at(root, path).ok().filter(|t| !t.is_empty())
}
