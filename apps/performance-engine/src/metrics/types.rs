//! Input records for the performance metric calculations.
//!
//! All records are immutable values handed in by the persistence layer.
//! Amounts are plain `f64`; decimal storage values are converted at the
//! boundary (see [`crate::convert`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account equity at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Account equity.
    pub equity: f64,
}

impl EquityPoint {
    /// Create an equity point.
    #[must_use]
    pub const fn new(date: NaiveDate, equity: f64) -> Self {
        Self { date, equity }
    }
}

/// Percentage return for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Return in percentage points (e.g., 2.5 = 2.5%).
    pub return_percent: f64,
}

impl MonthlyReturn {
    /// Create a monthly return.
    #[must_use]
    pub const fn new(year: i32, month: u32, return_percent: f64) -> Self {
        Self {
            year,
            month,
            return_percent,
        }
    }
}

/// Raw dollar P&L for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnlEntry {
    /// Calendar day (ISO 8601, as entered or imported).
    pub date: String,
    /// Net P&L; negative is a loss.
    pub pnl: f64,
}

impl DailyPnlEntry {
    /// Create a daily P&L entry.
    #[must_use]
    pub fn new(date: impl Into<String>, pnl: f64) -> Self {
        Self {
            date: date.into(),
            pnl,
        }
    }
}

/// Coarse backtest statistics, used when no daily or equity series exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestStatsSummary {
    /// Number of winning trades.
    pub winning_trades: u32,
    /// Number of losing trades.
    pub losing_trades: u32,
    /// Total trades, including breakeven.
    pub total_trades: u32,
    /// Percent of the account risked per trade.
    pub risk_percent: f64,
    /// Reward multiple of the risk on a winning trade.
    pub rr_ratio: f64,
}

/// Headline return figures for the simplified Sharpe estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnSummary {
    /// Total return over the period, in percent.
    pub total_return_percent: f64,
    /// Length of the period in calendar days.
    pub period_days: f64,
    /// Maximum drawdown in percent (sign is ignored).
    pub max_drawdown_percent: f64,
}
