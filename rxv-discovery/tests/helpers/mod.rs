//! Test helpers for fixture-based discovery tests

use std::fs;
use std::net::{SocketAddr, UdpSocket};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Description document fixture
#[derive(Debug, Clone)]
pub struct DeviceFixture {
    pub name: String,
    pub xml_content: String,
}

impl DeviceFixture {
    /// Load a fixture from the fixtures directory
    pub fn load(filename: &str) -> Self {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures");
        path.push(filename);

        let xml_content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));

        Self {
            name: filename.to_string(),
            xml_content,
        }
    }
}

/// Build an SSDP answer pointing at `location`
pub fn ssdp_response(location: &str, uuid: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n\
         CACHE-CONTROL: max-age=1800\r\n\
         EXT:\r\n\
         LOCATION: {}\r\n\
         SERVER: Network_Module/1.0 (RX-V673) UPnP/1.0 DLNADOC/1.50\r\n\
         ST: urn:schemas-upnp-org:device:MediaRenderer:1\r\n\
         USN: uuid:{}::urn:schemas-upnp-org:device:MediaRenderer:1\r\n\r\n",
        location, uuid
    )
}

/// A unicast stand-in for the SSDP multicast group.
///
/// Waits for one M-SEARCH and answers it with `answers`, in order.
pub struct SsdpResponder {
    pub addr: SocketAddr,
    handle: JoinHandle<bool>,
}

impl SsdpResponder {
    pub fn start(answers: Vec<String>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("bind responder");
        socket
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("set responder timeout");
        let addr = socket.local_addr().expect("responder address");

        let handle = thread::spawn(move || {
            let mut buf = [0u8; 2048];
            let Ok((size, from)) = socket.recv_from(&mut buf) else {
                return false;
            };
            let request = String::from_utf8_lossy(&buf[..size]).to_string();
            if !request.starts_with("M-SEARCH") {
                return false;
            }
            for answer in &answers {
                socket.send_to(answer.as_bytes(), from).expect("send answer");
            }
            true
        });

        Self { addr, handle }
    }

    /// Whether an M-SEARCH was received and answered
    pub fn finish(self) -> bool {
        self.handle.join().unwrap_or(false)
    }
}
