//! Core types for Sharpe ratio estimation.

use std::fmt;

use serde::Serialize;

use crate::error::Unavailable;
use crate::metrics::{EquityPoint, MonthlyReturn, ReturnSummary};

/// Estimation method that produced a Sharpe ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpeMethod {
    /// Sample statistics of monthly percentage returns, annualized by sqrt(12).
    MonthlyReturns,
    /// Sample statistics of period returns from the equity curve, annualized by sqrt(252).
    EquityCurve,
    /// Return over drawdown heuristic from headline figures.
    Simplified,
    /// No method was applicable.
    None,
}

impl SharpeMethod {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthlyReturns => "monthly_returns",
            Self::EquityCurve => "equity_curve",
            Self::Simplified => "simplified",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SharpeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whatever return data the caller has on hand.
///
/// Every field is optional; the estimator picks the best method the data
/// supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpeInputs<'a> {
    /// Monthly percentage returns.
    pub monthly_returns: Option<&'a [MonthlyReturn]>,
    /// Equity observations, in any order.
    pub equity_curve: Option<&'a [EquityPoint]>,
    /// Headline return figures.
    pub summary: Option<ReturnSummary>,
}

impl<'a> SharpeInputs<'a> {
    /// Attach monthly returns.
    #[must_use]
    pub const fn with_monthly_returns(mut self, returns: &'a [MonthlyReturn]) -> Self {
        self.monthly_returns = Some(returns);
        self
    }

    /// Attach an equity curve.
    #[must_use]
    pub const fn with_equity_curve(mut self, curve: &'a [EquityPoint]) -> Self {
        self.equity_curve = Some(curve);
        self
    }

    /// Attach a headline return summary.
    #[must_use]
    pub const fn with_summary(mut self, summary: ReturnSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Why one strategy did not produce a ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyAttempt {
    /// Strategy that was tried.
    pub method: SharpeMethod,
    /// Reason it produced nothing.
    pub reason: Unavailable,
}

/// Outcome of Sharpe estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharpeResult {
    /// Annualized Sharpe ratio; `None` means it could not be computed.
    pub sharpe_ratio: Option<f64>,
    /// Method that produced the ratio, or the furthest applicable one tried.
    pub method: SharpeMethod,
    /// Strategies that were skipped or failed, in priority order.
    pub attempts: Vec<StrategyAttempt>,
}

impl SharpeResult {
    /// Reason the ratio is missing, if it is.
    #[must_use]
    pub fn reason(&self) -> Option<&Unavailable> {
        if self.sharpe_ratio.is_some() {
            return None;
        }
        self.attempts
            .iter()
            .rev()
            .find(|a| a.method == self.method)
            .or_else(|| self.attempts.last())
            .map(|a| &a.reason)
    }
}
