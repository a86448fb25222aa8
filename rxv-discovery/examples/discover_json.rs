//! Receiver discovery that outputs JSON for scripting
//!
//! Usage: cargo run -p rxv-sdk-discovery --example discover_json [timeout_secs]

use rxv_discovery::{discover, DiscoveryError};
use std::time::Duration;

fn main() {
    let timeout = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    let endpoints = match discover(Duration::from_secs(timeout)) {
        Ok(endpoints) => endpoints,
        Err(DiscoveryError::NoDeviceFound) => Vec::new(),
        Err(e) => {
            eprintln!("discovery failed: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&endpoints) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to encode result: {}", e),
    }
}
