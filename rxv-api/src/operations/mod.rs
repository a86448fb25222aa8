//! Receiver operations grouped by zone

pub mod main_zone;
pub mod system;

pub use main_zone::*;
pub use system::*;
