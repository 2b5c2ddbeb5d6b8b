//! Calculation defaults for the report builder.

use serde::{Deserialize, Serialize};

use crate::metrics::constants::{
    DEFAULT_CONSISTENCY_THRESHOLD_PCT, DEFAULT_PIP_MULTIPLIER, DEFAULT_RISK_FREE_RATE,
};

/// Sharpe estimation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpeConfig {
    /// Annual risk-free rate as a fraction (0.02 = 2%).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

impl Default for SharpeConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// Profit-consistency rule settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Largest share of total profit a single day may hold, in percent.
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            threshold_pct: default_threshold_pct(),
        }
    }
}

/// Position sizing settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Price units to pips.
    #[serde(default = "default_pip_multiplier")]
    pub pip_multiplier: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            pip_multiplier: default_pip_multiplier(),
        }
    }
}

const fn default_risk_free_rate() -> f64 {
    DEFAULT_RISK_FREE_RATE
}

const fn default_threshold_pct() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD_PCT
}

const fn default_pip_multiplier() -> f64 {
    DEFAULT_PIP_MULTIPLIER
}
