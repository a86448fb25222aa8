//! System section operations

pub mod get_config;

pub use get_config::{GetConfigOperation, SystemConfig};
