//! Shared inputs and statistics primitives for performance metrics.
//!
//! - Descriptive statistics (mean, sample standard deviation)
//! - Input records (equity points, monthly returns, daily P&L, backtest stats)
//! - Drawdown, trade statistics and period derivations from an equity curve

pub mod constants;
mod drawdown;
mod format;
pub mod math;
mod periods;
mod trade_stats;
mod types;

pub use drawdown::max_drawdown_pct;
pub(crate) use drawdown::sorted_by_date;
pub use format::{format_amount, format_pct, format_ratio};
pub use periods::{monthly_returns_from_equity, summary_from_equity};
pub use trade_stats::TradeStats;
pub use types::{BacktestStatsSummary, DailyPnlEntry, EquityPoint, MonthlyReturn, ReturnSummary};
