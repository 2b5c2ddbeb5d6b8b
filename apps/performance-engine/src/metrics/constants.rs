//! Constants shared by the performance metric calculations.

/// Percentage scale factor.
pub const HUNDRED: f64 = 100.0;
/// Calendar days per year, used to annualize period returns.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Trading days per year, used to annualize daily Sharpe.
pub const TRADING_DAYS: f64 = 252.0;
/// Months per year, used to annualize monthly Sharpe.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default annual risk-free rate (2%).
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
/// Default profit-consistency threshold in percent.
pub const DEFAULT_CONSISTENCY_THRESHOLD_PCT: f64 = 20.0;
/// Pips per unit of price for FX-style symbols.
pub const DEFAULT_PIP_MULTIPLIER: f64 = 10_000.0;

/// Minimum monthly samples for the monthly-returns Sharpe.
pub const MIN_MONTHLY_RETURNS: usize = 3;
/// Minimum equity points for the equity-curve Sharpe.
pub const MIN_EQUITY_POINTS: usize = 10;
/// Minimum period returns left after differencing the equity curve.
pub const MIN_PERIOD_RETURNS: usize = 2;
/// Minimum entries for a daily P&L consistency check.
pub const MIN_DAILY_ENTRIES: usize = 2;
/// Itemized periods in a compound projection breakdown.
pub const MAX_BREAKDOWN_PERIODS: u32 = 24;

/// Standard deviations at or below this count as zero.
pub const TOLERANCE: f64 = 1e-9;
