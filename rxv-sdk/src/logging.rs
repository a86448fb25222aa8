//! Logging setup for applications embedding the SDK
//!
//! The library crates only emit `tracing` events; nothing is printed until
//! the application installs a subscriber, either directly or through
//! [`init_logging`] / [`init_logging_from_env`].

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose output with source locations
    Debug,
    /// One JSON object per event, for log collectors
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for `mode`
///
/// Fails if a global subscriber is already set.
///
/// # Environment Variables
///
/// - `RXV_LOG_LEVEL`: filter directives (e.g. `debug`, `rxv_discovery=trace`)
/// - `RUST_LOG`: used when `RXV_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .with(env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter("debug"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Json => Registry::default()
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .with(env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Initialize logging from `RXV_LOG_MODE`
///
/// Accepts "silent", "development", "debug" or "json"; anything else is silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(parse_mode(std::env::var("RXV_LOG_MODE").ok().as_deref()))
}

fn parse_mode(value: Option<&str>) -> LoggingMode {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("development") => LoggingMode::Development,
        Some("debug") => LoggingMode::Debug,
        Some("json") => LoggingMode::Json,
        _ => LoggingMode::Silent,
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    // RXV_LOG_LEVEL, then RUST_LOG, then the mode's default
    match std::env::var("RXV_LOG_LEVEL").or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::new(default_level),
    }
}

/// Whether a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
