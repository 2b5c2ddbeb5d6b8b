//! Configuration for the performance engine binary.
//!
//! Calculation functions never read configuration; they take explicit
//! parameters. This module only feeds the report builder and the binary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use performance_engine::config::{load_config, load_config_from_env};
//!
//! // PERF_ENGINE_CONFIG, else ./config.yaml if present, else defaults
//! let config = load_config_from_env()?;
//!
//! // Explicit path, must exist
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("Risk-free rate: {}", config.sharpe.risk_free_rate);
//! ```

mod calculation;
mod observability;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use calculation::{ConsistencyConfig, SharpeConfig, SizingConfig};
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PERF_ENGINE_CONFIG";

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Sharpe estimation settings.
    #[serde(default)]
    pub sharpe: SharpeConfig,
    /// Profit-consistency settings.
    #[serde(default)]
    pub consistency: ConsistencyConfig,
    /// Position sizing settings.
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml",
///   and a missing default file yields the default configuration.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let Some(path) = path else {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            debug!(path = DEFAULT_CONFIG_PATH, "No config file, using defaults");
            return Ok(EngineConfig::default());
        }
        return load_config(Some(DEFAULT_CONFIG_PATH));
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from the path in `PERF_ENGINE_CONFIG`, if set.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config_from_env() -> Result<EngineConfig, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(Some(&path)),
        _ => load_config(None),
    }
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    // An empty or comment-only file means "all defaults".
    let config: EngineConfig = if interpolated.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    }) {
        EngineConfig::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    let rate = config.sharpe.risk_free_rate;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::ValidationError(
            "sharpe.risk_free_rate must be between 0.0 and 1.0".to_string(),
        ));
    }

    let threshold = config.consistency.threshold_pct;
    if !(threshold > 0.0 && threshold <= 100.0) {
        return Err(ConfigError::ValidationError(
            "consistency.threshold_pct must be greater than 0 and at most 100".to_string(),
        ));
    }

    let multiplier = config.sizing.pip_multiplier;
    if !(multiplier.is_finite() && multiplier > 0.0) {
        return Err(ConfigError::ValidationError(
            "sizing.pip_multiplier must be positive".to_string(),
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}
