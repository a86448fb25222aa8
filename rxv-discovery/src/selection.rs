//! Choosing one endpoint out of several discovery results.

use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, Result};
use crate::DeviceEndpoint;

/// Rule for picking a receiver when discovery returns candidates.
///
/// Serialized in snake case: `"first_responder"` or `{"model_name": "RX-V673"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The receiver whose SSDP answer arrived first
    #[default]
    FirstResponder,
    /// The first receiver with this model name (case-insensitive)
    ModelName(String),
    /// The first receiver with this friendly name (case-insensitive)
    FriendlyName(String),
}

/// Pick an endpoint from `candidates` (in arrival order) according to `policy`.
///
/// # Errors
///
/// Returns `DiscoveryError::NoDeviceFound` if there are no candidates or none
/// matches the policy.
pub fn select_endpoint(candidates: &[DeviceEndpoint], policy: &SelectionPolicy) -> Result<DeviceEndpoint> {
    let selected = match policy {
        SelectionPolicy::FirstResponder => {
            if candidates.len() > 1 {
                tracing::warn!(
                    count = candidates.len(),
                    "multiple receivers answered, selecting the first responder"
                );
            }
            candidates.first()
        }
        SelectionPolicy::ModelName(model) => candidates
            .iter()
            .find(|c| matches_ignore_case(c.model_name.as_deref(), model)),
        SelectionPolicy::FriendlyName(name) => candidates
            .iter()
            .find(|c| matches_ignore_case(c.friendly_name.as_deref(), name)),
    };

    selected.cloned().ok_or(DiscoveryError::NoDeviceFound)
}

fn matches_ignore_case(value: Option<&str>, wanted: &str) -> bool {
    value.map(|v| v.eq_ignore_ascii_case(wanted)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn endpoint(url: &str, model: &str, name: &str) -> DeviceEndpoint {
        DeviceEndpoint {
            control_url: url.to_string(),
            explicit: false,
            model_name: Some(model.to_string()),
            friendly_name: Some(name.to_string()),
            udn: None,
        }
    }

    fn candidates() -> Vec<DeviceEndpoint> {
        vec![
            endpoint("http://10.0.0.2/YamahaRemoteControl/ctrl", "RX-V573", "Den"),
            endpoint("http://10.0.0.3/YamahaRemoteControl/ctrl", "RX-V673", "Living Room"),
        ]
    }

    #[rstest]
    #[case(SelectionPolicy::FirstResponder, "http://10.0.0.2/YamahaRemoteControl/ctrl")]
    #[case(SelectionPolicy::ModelName("rx-v673".to_string()), "http://10.0.0.3/YamahaRemoteControl/ctrl")]
    #[case(SelectionPolicy::FriendlyName("Den".to_string()), "http://10.0.0.2/YamahaRemoteControl/ctrl")]
    fn test_select_endpoint(#[case] policy: SelectionPolicy, #[case] expected_url: &str) {
        let selected = select_endpoint(&candidates(), &policy).unwrap();
        assert_eq!(selected.control_url, expected_url);
    }

    #[test]
    fn test_select_from_empty_list() {
        assert_eq!(
            select_endpoint(&[], &SelectionPolicy::FirstResponder),
            Err(DiscoveryError::NoDeviceFound)
        );
    }

    #[test]
    fn test_select_without_match() {
        let policy = SelectionPolicy::ModelName("RX-A3080".to_string());
        assert_eq!(
            select_endpoint(&candidates(), &policy),
            Err(DiscoveryError::NoDeviceFound)
        );
    }

    #[test]
    fn test_policy_serde_format() {
        let json = serde_json::to_string(&SelectionPolicy::FirstResponder).unwrap();
        assert_eq!(json, "\"first_responder\"");

        let policy: SelectionPolicy = serde_json::from_str(r#"{"model_name":"RX-V673"}"#).unwrap();
        assert_eq!(policy, SelectionPolicy::ModelName("RX-V673".to_string()));
    }
}
