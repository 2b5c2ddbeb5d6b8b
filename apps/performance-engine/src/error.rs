//! Error types for the performance engine.
//!
//! Two kinds of failure exist and the API keeps them apart:
//!
//! - [`CalcError`]: caller contract violation (non-positive balance, bad
//!   threshold), returned as `Err(..)`
//! - [`Unavailable`]: cannot compute (too few points, zero variance, no
//!   profit), carried inside the result
//!
//! `Unavailable` is an expected, displayable business outcome. The UI renders
//! its `Display` text verbatim.

use serde::Serialize;
use thiserror::Error;

/// Caller contract violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A parameter is outside its documented domain.
    #[error("Invalid parameter `{name}` = {value}: must be {requirement}")]
    InvalidParameter {
        /// Parameter name as it appears in the function signature.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable domain, e.g. "greater than 0".
        requirement: &'static str,
    },
}

impl CalcError {
    /// Build an `InvalidParameter` error.
    #[must_use]
    pub const fn invalid(name: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            requirement,
        }
    }
}

/// Require `value > 0` and finite.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(name, value, "a finite number greater than 0"))
    }
}

/// Require `value >= 0` and finite.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(name, value, "a finite number not below 0"))
    }
}

/// Reason a metric could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unavailable {
    /// Fewer samples than the method needs.
    #[error("Not enough data: {required} data points required, {actual} available")]
    InsufficientData {
        /// Minimum number of samples.
        required: usize,
        /// Samples supplied.
        actual: usize,
    },

    /// The input the method works from was not supplied.
    #[error("No {input} supplied")]
    MissingInput {
        /// The input that is absent.
        input: &'static str,
    },

    /// Every sample is identical, so dispersion is zero.
    #[error("Returns show no volatility, so a risk-adjusted ratio cannot be computed")]
    ZeroVariance,

    /// A required divisor is zero.
    #[error("Cannot compute: {divisor} is zero")]
    ZeroDenominator {
        /// The quantity that would be divided by.
        divisor: &'static str,
    },

    /// An intermediate figure overflowed to infinity.
    #[error("Cannot compute: {quantity} is not a finite number")]
    NotFinite {
        /// The quantity that overflowed.
        quantity: &'static str,
    },

    /// Total profit is zero or negative.
    #[error("Total profit is {total}; consistency can only be evaluated on a profitable series")]
    NonPositiveTotal {
        /// Net total of the series, rounded to cents.
        total: String,
    },

    /// No entry in the series made money.
    #[error("No profitable days in the series; consistency cannot pass")]
    NoProfitableDays,
}

impl Unavailable {
    /// `NonPositiveTotal` from a numeric total.
    #[must_use]
    pub fn non_positive_total(total: f64) -> Self {
        Self::NonPositiveTotal {
            total: format!("{total:.2}"),
        }
    }

    /// Fewer data points than required, or the input is missing entirely.
    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData { .. } | Self::MissingInput { .. })
    }

    /// Enough data, but the data cannot produce a meaningful number.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        !self.is_insufficient()
    }
}
