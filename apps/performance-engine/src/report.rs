//! Full performance report from whatever inputs a caller has.
//!
//! Runs each calculator on the inputs it needs and skips the ones whose
//! inputs are absent. This is the entry point used by the binary.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::consistency::{
    ConsistencyResult, aggregate_daily, evaluate_from_daily, evaluate_from_stats,
};
use crate::error::{CalcError, Unavailable};
use crate::metrics::constants::{DEFAULT_CONSISTENCY_THRESHOLD_PCT, DEFAULT_RISK_FREE_RATE};
use crate::metrics::{
    BacktestStatsSummary, DailyPnlEntry, EquityPoint, MonthlyReturn, ReturnSummary, TradeStats,
    max_drawdown_pct, summary_from_equity,
};
use crate::sharpe::{SharpeEstimator, SharpeInputs, SharpeResult};
use crate::sizing::{
    CompoundProjection, KellyResult, PositionSize, PositionSizer, PositionSizerConfig,
    kelly_from_trade_stats, project_compound_growth,
};

/// Parameters for sizing one trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Account balance.
    pub account_balance: f64,
    /// Percent of balance to risk.
    pub risk_percent: f64,
    /// Entry price.
    pub entry_price: f64,
    /// Stop-loss price.
    pub stop_loss_price: f64,
    /// Account currency per pip per lot.
    pub pip_value: f64,
}

/// Parameters for a compound growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Capital at period 0.
    pub starting_capital: f64,
    /// Return per period as a fraction.
    pub periodic_return: f64,
    /// Number of periods.
    pub num_periods: u32,
}

/// Inputs for a report. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    /// Monthly percentage returns.
    pub monthly_returns: Option<Vec<MonthlyReturn>>,
    /// Account equity over time.
    pub equity_curve: Option<Vec<EquityPoint>>,
    /// Headline return figures; derived from the equity curve when absent.
    pub summary: Option<ReturnSummary>,
    /// Journal P&L rows, one or more per day.
    pub daily_pnl: Option<Vec<DailyPnlEntry>>,
    /// Per-trade P&L values.
    pub trade_pnls: Option<Vec<f64>>,
    /// Coarse backtest statistics.
    pub backtest_stats: Option<BacktestStatsSummary>,
    /// Trade to size.
    pub position: Option<PositionRequest>,
    /// Growth projection to run.
    pub projection: Option<ProjectionRequest>,
}

/// Calculation settings for a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Annual risk-free rate as a fraction.
    pub risk_free_rate: f64,
    /// Profit-consistency threshold, in percent.
    pub consistency_threshold_pct: f64,
    /// Position sizer configuration.
    pub sizer: PositionSizerConfig,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            consistency_threshold_pct: DEFAULT_CONSISTENCY_THRESHOLD_PCT,
            sizer: PositionSizerConfig::default(),
        }
    }
}

impl From<&EngineConfig> for EngineSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            risk_free_rate: config.sharpe.risk_free_rate,
            consistency_threshold_pct: config.consistency.threshold_pct,
            sizer: PositionSizerConfig {
                pip_multiplier: config.sizing.pip_multiplier,
            },
        }
    }
}

/// Performance report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// Annualized Sharpe estimate.
    pub sharpe: SharpeResult,
    /// Profit-consistency check, if daily P&L or backtest stats were given.
    pub consistency: Option<ConsistencyResult>,
    /// Trade statistics, if trade P&L was given.
    pub trade_stats: Option<TradeStats>,
    /// Kelly fractions from the trade statistics.
    pub kelly: Option<KellyResult>,
    /// Why Kelly could not be computed from the trade statistics.
    pub kelly_unavailable: Option<Unavailable>,
    /// Maximum drawdown of the equity curve, in percent.
    pub max_drawdown_percent: Option<f64>,
    /// Sized position, if requested.
    pub position_size: Option<PositionSize>,
    /// Growth projection, if requested.
    pub projection: Option<CompoundProjection>,
}

/// Build a report from the available inputs.
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if the settings or an explicit
/// position/projection request are invalid. Missing or degenerate data is
/// reported inside the individual results, never as an error.
pub fn build_report(
    request: &ReportRequest,
    settings: &EngineSettings,
) -> Result<PerformanceReport, CalcError> {
    let equity_curve = request.equity_curve.as_deref();
    let summary = request
        .summary
        .or_else(|| equity_curve.and_then(summary_from_equity));

    let mut inputs = SharpeInputs::default();
    if let Some(returns) = request.monthly_returns.as_deref() {
        inputs = inputs.with_monthly_returns(returns);
    }
    if let Some(curve) = equity_curve {
        inputs = inputs.with_equity_curve(curve);
    }
    if let Some(summary) = summary {
        inputs = inputs.with_summary(summary);
    }
    let sharpe = SharpeEstimator::new().estimate(&inputs, settings.risk_free_rate);

    let consistency = match (&request.daily_pnl, &request.backtest_stats) {
        (Some(rows), _) => Some(evaluate_from_daily(
            &aggregate_daily(rows),
            settings.consistency_threshold_pct,
        )?),
        (None, Some(stats)) => Some(evaluate_from_stats(
            stats,
            settings.consistency_threshold_pct,
        )?),
        (None, None) => None,
    };

    let trade_stats = request.trade_pnls.as_deref().map(TradeStats::from_pnls);
    let (kelly, kelly_unavailable) = match trade_stats.as_ref().map(kelly_from_trade_stats) {
        Some(Ok(kelly)) => (Some(kelly), None),
        Some(Err(reason)) => {
            debug!(%reason, "Kelly not computable from trade statistics");
            (None, Some(reason))
        }
        None => (None, None),
    };

    let position_size = request
        .position
        .map(|p| {
            PositionSizer::with_config(settings.sizer).size(
                p.account_balance,
                p.risk_percent,
                p.entry_price,
                p.stop_loss_price,
                p.pip_value,
            )
        })
        .transpose()?;

    let projection = request
        .projection
        .map(|p| project_compound_growth(p.starting_capital, p.periodic_return, p.num_periods))
        .transpose()?;

    info!(
        sharpe_method = %sharpe.method,
        consistency_indeterminate = consistency
            .as_ref()
            .map(ConsistencyResult::is_indeterminate),
        trades = trade_stats.as_ref().map_or(0, |s| s.total_trades),
        "Performance report built"
    );

    Ok(PerformanceReport {
        sharpe,
        consistency,
        trade_stats,
        kelly,
        kelly_unavailable,
        max_drawdown_percent: equity_curve.and_then(max_drawdown_pct),
        position_size,
        projection,
    })
}
