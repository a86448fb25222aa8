//! Register a receiver and print its state
//!
//! ```text
//! RXV_LOG_MODE=development cargo run -p rxv-sdk --example basic_usage
//! RXV_URL=http://192.168.1.116/YamahaRemoteControl/ctrl cargo run -p rxv-sdk --example basic_usage
//! ```

use rxv_sdk::logging::init_logging_from_env;
use rxv_sdk::{register_with_config, DeviceConfig, MediaState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let config = DeviceConfig::from_env()?;
    let receiver = register_with_config(&config)?;

    println!("Receiver: {}", receiver.name());
    println!("  Model:  {}", receiver.model_name()?);
    if let Some(url) = receiver.thumbnail_url() {
        println!("  Icon:   {}", url);
    }

    let state = receiver.refresh()?;
    println!("  Power:  {}", if state.power { "on" } else { "standby" });
    println!("  Volume: {:.1} dB ({:.2})", state.volume_native, receiver.volume()?);
    println!("  Muted:  {}", state.muted);
    if let Some(input) = &state.input {
        println!("  Input:  {}", input);
    }

    if receiver.state()? == MediaState::Off {
        println!("Receiver is in standby; not changing anything");
    }

    Ok(())
}
