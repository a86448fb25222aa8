//! Integration tests for receiver discovery
//!
//! A local UDP socket stands in for the SSDP multicast group and a mockito
//! server serves the description documents, so no real receivers are needed.

mod helpers;

use std::net::UdpSocket;
use std::time::{Duration, Instant};

use helpers::{ssdp_response, DeviceFixture, SsdpResponder};
use mockito::Server;
use rstest::rstest;
use rxv_discovery::device::DeviceDescription;
use rxv_discovery::{select_endpoint, Discover, Discovery, DiscoveryError, SelectionPolicy};

#[rstest]
#[case("rx_v673_description.xml", "RX-V673", "http://192.168.1.116/YamahaRemoteControl/ctrl")]
#[case("rx_v475_description.xml", "RX-V475", "http://192.168.1.120/YamahaRemoteControl/ctrl")]
fn test_parse_receiver_fixture(
    #[case] fixture_file: &str,
    #[case] expected_model: &str,
    #[case] expected_url: &str,
) {
    let fixture = DeviceFixture::load(fixture_file);
    let desc = DeviceDescription::from_xml(&fixture.xml_content, "http://192.168.1.1:8080/desc.xml")
        .expect("Failed to parse device XML");

    assert_eq!(desc.model_name, expected_model);
    assert!(desc.is_yamaha_receiver());

    let endpoint = desc.to_endpoint().unwrap();
    assert_eq!(endpoint.control_url, expected_url);
    assert!(!endpoint.explicit);
}

#[test]
fn test_generic_renderer_is_filtered() {
    let fixture = DeviceFixture::load("generic_renderer_description.xml");
    let desc = DeviceDescription::from_xml(&fixture.xml_content, "http://192.168.1.50/desc.xml").unwrap();

    assert!(!desc.is_yamaha_receiver(), "{} should not be controllable", fixture.name);
}

#[test]
fn test_empty_network_reports_no_device_after_timeout() {
    // Receives the M-SEARCH but never answers.
    let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
    let discovery = Discovery::new().with_multicast_addr(silent.local_addr().unwrap());

    let timeout = Duration::from_millis(300);
    let start = Instant::now();
    let result = discovery.discover(timeout);

    assert_eq!(result, Err(DiscoveryError::NoDeviceFound));
    assert!(
        start.elapsed() >= timeout,
        "discovery gave up after {:?}, before the {:?} window",
        start.elapsed(),
        timeout
    );
}

#[test]
fn test_discovery_orders_by_arrival_and_filters() {
    let mut server = Server::new();
    let _v475 = server
        .mock("GET", "/den/desc.xml")
        .with_body(DeviceFixture::load("rx_v475_description.xml").xml_content)
        .create();
    let _v673 = server
        .mock("GET", "/living/desc.xml")
        .with_body(DeviceFixture::load("rx_v673_description.xml").xml_content)
        .create();
    let _tv = server
        .mock("GET", "/tv/desc.xml")
        .with_body(DeviceFixture::load("generic_renderer_description.xml").xml_content)
        .create();

    let den = format!("{}/den/desc.xml", server.url());
    let living = format!("{}/living/desc.xml", server.url());
    let tv = format!("{}/tv/desc.xml", server.url());

    let responder = SsdpResponder::start(vec![
        ssdp_response(&den, "den"),
        ssdp_response(&tv, "tv"),
        ssdp_response(&den, "den"),
        ssdp_response(&living, "living"),
    ]);

    let endpoints = Discovery::new()
        .with_multicast_addr(responder.addr)
        .discover(Duration::from_millis(500))
        .expect("two receivers should be found");

    assert!(responder.finish(), "responder never saw the M-SEARCH");
    assert_eq!(endpoints.len(), 2, "duplicates and non-Yamaha devices are dropped");
    assert_eq!(endpoints[0].model_name.as_deref(), Some("RX-V475"));
    assert_eq!(endpoints[1].model_name.as_deref(), Some("RX-V673"));

    let first = select_endpoint(&endpoints, &SelectionPolicy::FirstResponder).unwrap();
    assert_eq!(first.control_url, "http://192.168.1.120/YamahaRemoteControl/ctrl");

    let by_name = select_endpoint(
        &endpoints,
        &SelectionPolicy::FriendlyName("living room av".to_string()),
    )
    .unwrap();
    assert_eq!(by_name.control_url, "http://192.168.1.116/YamahaRemoteControl/ctrl");
}

#[test]
fn test_unreachable_description_is_skipped() {
    let responder = SsdpResponder::start(vec![ssdp_response(
        "http://127.0.0.1:1/desc.xml",
        "gone",
    )]);

    let result = Discovery::new()
        .with_multicast_addr(responder.addr)
        .discover(Duration::from_millis(300));

    assert!(responder.finish());
    assert_eq!(result, Err(DiscoveryError::NoDeviceFound));
}

#[test]
fn test_non_ascii_answer_is_skipped() {
    let responder = SsdpResponder::start(vec!["HTTP/1.1 200 OK\r\nS€ junk\r\n\r\n".to_string()]);

    let result = Discovery::new()
        .with_multicast_addr(responder.addr)
        .discover(Duration::from_millis(300));

    assert!(responder.finish());
    assert_eq!(result, Err(DiscoveryError::NoDeviceFound));
}
