// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Performance Engine - Trading Journal Metrics
//!
//! Pure, synchronous calculators for scoring trading performance.
//!
//! ## Modules
//!
//! - `metrics`: Input records and shared statistics (drawdown, trade stats,
//!   period returns)
//! - `sharpe`: Annualized Sharpe estimation with strategy fallback
//!   (monthly returns, equity curve, simplified)
//! - `consistency`: Prop-firm profit-consistency rule
//! - `sizing`: Kelly criterion, compound growth projection, position sizing
//! - `report`: Runs every applicable calculator over one request
//!
//! ## Outer surface
//!
//! - `config`: YAML configuration for the binary
//! - `telemetry`: Tracing subscriber setup
//! - `convert`: Decimal storage values to engine inputs
//!
//! "Cannot compute" is never an error: results carry `Option` values with an
//! [`Unavailable`] reason. Only invalid caller parameters return
//! [`CalcError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod consistency;
pub mod convert;
pub mod error;
pub mod metrics;
pub mod report;
pub mod sharpe;
pub mod sizing;
pub mod telemetry;

pub use consistency::{ConsistencyResult, evaluate_from_daily, evaluate_from_stats};
pub use error::{CalcError, Unavailable};
pub use metrics::{
    BacktestStatsSummary, DailyPnlEntry, EquityPoint, MonthlyReturn, ReturnSummary, TradeStats,
};
pub use report::{EngineSettings, PerformanceReport, ReportRequest, build_report};
pub use sharpe::{SharpeEstimator, SharpeInputs, SharpeMethod, SharpeResult, estimate_sharpe};
pub use sizing::{
    CompoundProjection, KellyResult, PositionSize, PositionSizer, PositionSizerConfig,
    kelly_criterion, kelly_from_trade_stats, project_compound_growth,
};
