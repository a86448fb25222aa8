//! Registration with explicit URLs and with discovery

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use mockito::{Matcher, Server};
use rxv_discovery::DiscoveryError;
use rxv_sdk::{
    register_device, register_with_discovery, resolve_endpoint, DeviceConfig, DeviceEndpoint, Discover,
    MediaState, SdkError, SelectionPolicy,
};

/// Discovery stand-in that counts scans
struct FakeDiscovery {
    calls: AtomicUsize,
    result: Result<Vec<DeviceEndpoint>, DiscoveryError>,
}

impl FakeDiscovery {
    fn returning(result: Result<Vec<DeviceEndpoint>, DiscoveryError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Discover for FakeDiscovery {
    fn discover(&self, _timeout: Duration) -> Result<Vec<DeviceEndpoint>, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn discovered(url: &str, model: &str) -> DeviceEndpoint {
    DeviceEndpoint {
        control_url: url.to_string(),
        explicit: false,
        model_name: Some(model.to_string()),
        friendly_name: None,
        udn: None,
    }
}

#[test]
fn test_explicit_url_skips_discovery() {
    let discovery = FakeDiscovery::returning(Err(DiscoveryError::NoDeviceFound));
    let config = DeviceConfig::new("Yamaha").with_url("http://host/ctrl");

    let receiver = register_with_discovery(&config, &discovery).unwrap();

    assert_eq!(discovery.calls(), 0);
    assert_eq!(receiver.name(), "Yamaha");
    assert_eq!(
        receiver.thumbnail_url().as_deref(),
        Some("http://host:8080/BCO_device_sm_icon.png")
    );
}

#[test]
fn test_missing_url_uses_first_responder() {
    let discovery = FakeDiscovery::returning(Ok(vec![
        discovered("http://192.168.1.120/YamahaRemoteControl/ctrl", "RX-V475"),
        discovered("http://192.168.1.116/YamahaRemoteControl/ctrl", "RX-V673"),
    ]));

    let endpoint = resolve_endpoint(&DeviceConfig::default(), &discovery).unwrap();

    assert_eq!(discovery.calls(), 1);
    assert_eq!(endpoint.control_url, "http://192.168.1.120/YamahaRemoteControl/ctrl");
}

#[test]
fn test_selection_policy_from_config() {
    let discovery = FakeDiscovery::returning(Ok(vec![
        discovered("http://192.168.1.120/YamahaRemoteControl/ctrl", "RX-V475"),
        discovered("http://192.168.1.116/YamahaRemoteControl/ctrl", "RX-V673"),
    ]));
    let config = DeviceConfig::default().with_selection(SelectionPolicy::ModelName("rx-v673".to_string()));

    let receiver = register_with_discovery(&config, &discovery).unwrap();

    // Model name comes from discovery, no request needed
    assert_eq!(receiver.model_name().unwrap(), "RX-V673");
}

#[test]
fn test_empty_url_means_discovery() {
    let discovery = FakeDiscovery::returning(Err(DiscoveryError::NoDeviceFound));
    let config = DeviceConfig::default().with_url("");

    let err = register_with_discovery(&config, &discovery).err().unwrap();

    assert_eq!(discovery.calls(), 1);
    assert_eq!(err, SdkError::Discovery(DiscoveryError::NoDeviceFound));
}

#[test]
fn test_invalid_explicit_url() {
    let discovery = FakeDiscovery::returning(Ok(Vec::new()));
    let config = DeviceConfig::default().with_url("ftp://host/ctrl");

    match register_with_discovery(&config, &discovery) {
        Err(SdkError::Discovery(DiscoveryError::InvalidEndpoint(_))) => {}
        other => panic!("Expected InvalidEndpoint, got {:?}", other.err()),
    }
    assert_eq!(discovery.calls(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let discovery = FakeDiscovery::returning(Ok(Vec::new()));
    let mut config = DeviceConfig::default().with_url("http://host/ctrl");
    config.volume_min_db = 0.0;

    assert!(matches!(
        register_with_discovery(&config, &discovery),
        Err(SdkError::Config(_))
    ));
}

#[test]
fn test_register_device_over_http() {
    let mut server = Server::new();
    let put = server
        .mock("POST", "/YamahaRemoteControl/ctrl")
        .match_body(Matcher::Regex(r#"cmd="PUT"><Main_Zone><Volume><Lvl><Val>-420</Val>"#.to_string()))
        .with_body(r#"<YAMAHA_AV rsp="PUT" RC="0"></YAMAHA_AV>"#)
        .create();
    let status = server
        .mock("POST", "/YamahaRemoteControl/ctrl")
        .match_body(Matcher::Regex("<Basic_Status>GetParam</Basic_Status>".to_string()))
        .with_body(
            r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status>
            <Power_Control><Power>Standby</Power></Power_Control>
            <Volume><Lvl><Val>-420</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>Off</Mute></Volume>
            </Basic_Status></Main_Zone></YAMAHA_AV>"#,
        )
        .create();

    let url = format!("{}/YamahaRemoteControl/ctrl", server.url());
    let receiver = register_device("Den", Some(&url)).unwrap();

    receiver.set_volume(0.5).unwrap();
    assert_eq!(receiver.state().unwrap(), MediaState::Off);

    put.assert();
    status.assert();
}

#[test]
fn test_register_device_unreachable() {
    let receiver = register_device("Den", Some("http://127.0.0.1:1/YamahaRemoteControl/ctrl")).unwrap();
    assert!(matches!(receiver.state(), Err(SdkError::DeviceUnreachable(_))));
}
