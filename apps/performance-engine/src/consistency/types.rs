//! Result types for profit-consistency evaluation.

use serde::Serialize;

use crate::error::Unavailable;

/// Where the evaluated figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencySource {
    /// Actual daily P&L series.
    DailyPnl,
    /// Estimate synthesized from win/loss counts, risk and RR.
    StatsEstimate,
}

/// Outcome of a profit-consistency check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyResult {
    /// Best day as a percent of total profit; `None` when indeterminate.
    pub consistency_percent: Option<f64>,
    /// Whether the rule is satisfied. Always `false` when indeterminate.
    pub passed: bool,
    /// Largest single-day (or single-trade) profit, never negative.
    pub best_day_profit: f64,
    /// Net profit of the series.
    pub total_profit: f64,
    /// Days (or winning trades) with profit above zero.
    pub profitable_days: u32,
    /// Days (or losing trades) with profit below zero.
    pub losing_days: u32,
    /// Maximum allowed best-day share, in percent.
    pub threshold: f64,
    /// Human-readable explanation of the outcome.
    pub message: String,
    /// Why the percentage could not be computed.
    pub reason: Option<Unavailable>,
    /// Input the figures came from.
    pub source: ConsistencySource,
}

impl ConsistencyResult {
    /// Whether the check could not be evaluated.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        self.consistency_percent.is_none()
    }
}
