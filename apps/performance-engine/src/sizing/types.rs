//! Result types for sizing and projection calculations.

use std::fmt;

use serde::Serialize;

/// Full Kelly above this fraction draws an `Aggressive` advisory.
pub const AGGRESSIVE_KELLY_FRACTION: f64 = 0.25;

/// Caller-facing advice attached to a Kelly result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KellyAdvisory {
    /// Full Kelly is zero or negative: the statistics show no edge.
    NoEdge,
    /// Full Kelly exceeds 25% of the account.
    Aggressive,
}

impl fmt::Display for KellyAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEdge => write!(
                f,
                "No statistical edge: the Kelly fraction is not positive, \
                 so no position should be sized on these statistics"
            ),
            Self::Aggressive => write!(
                f,
                "Full Kelly exceeds 25% of the account; \
                 half or quarter Kelly is recommended to limit drawdowns"
            ),
        }
    }
}

/// Kelly criterion sizing fractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KellyResult {
    /// Full Kelly, percent of account. Negative means no edge.
    pub full_kelly_percent: f64,
    /// Half Kelly, percent of account.
    pub half_kelly_percent: f64,
    /// Quarter Kelly, percent of account.
    pub quarter_kelly_percent: f64,
    /// Average win / average loss.
    pub payoff_ratio: f64,
    /// Expected P&L per trade, in the units of the averages.
    pub expectancy: f64,
    /// Advice for the caller, if any.
    pub advisory: Option<KellyAdvisory>,
}

/// One itemized period of a compound projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPeriod {
    /// Period number, starting at 1.
    pub period: u32,
    /// Capital at the end of the period.
    pub capital: f64,
    /// Cumulative profit versus starting capital.
    pub profit: f64,
}

/// Capital growth under a constant periodic return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundProjection {
    /// Capital after all periods.
    pub final_capital: f64,
    /// Final capital minus starting capital.
    pub total_profit: f64,
    /// Total profit as a percent of starting capital.
    pub total_return_percent: f64,
    /// Itemized periods, capped at 24.
    pub breakdown: Vec<ProjectionPeriod>,
}

/// Position size for a stop-defined risk budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSize {
    /// Account currency at risk.
    pub risk_amount: f64,
    /// Entry-to-stop distance in price units.
    pub stop_loss_distance: f64,
    /// Entry-to-stop distance in pips.
    pub stop_loss_pips: f64,
    /// Position size in lots.
    pub lot_size: f64,
    /// Position size in units of the instrument.
    pub units: f64,
}
