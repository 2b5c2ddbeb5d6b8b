//! Tracing subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Logs go to stderr so stdout carries only the report.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives, overriding `observability.logging.level`
//! - `observability.logging.format`: `pretty` or `json`

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global console subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_telemetry(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config);

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init()?,
    }

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
