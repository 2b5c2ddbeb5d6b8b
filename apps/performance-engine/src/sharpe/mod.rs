//! Annualized Sharpe ratio estimation from whatever data is available.
//!
//! Three strategies, tried in priority order:
//! 1. Monthly returns (>= 3 samples), annualized by sqrt(12)
//! 2. Equity curve (>= 10 points), daily returns annualized by sqrt(252)
//! 3. Simplified fallback from total return and max drawdown
//!
//! # Example
//!
//! ```rust,ignore
//! use performance_engine::sharpe::{SharpeEstimator, SharpeInputs};
//!
//! let inputs = SharpeInputs::default()
//!     .with_monthly_returns(&monthly)
//!     .with_equity_curve(&curve);
//!
//! let result = SharpeEstimator::new().estimate(&inputs, 0.02);
//! match result.sharpe_ratio {
//!     Some(ratio) => println!("Sharpe {ratio:.2} via {}", result.method),
//!     None => println!("{}", result.reason().map(ToString::to_string).unwrap_or_default()),
//! }
//! ```

mod estimator;
mod strategy;
mod types;

pub use estimator::{SharpeEstimator, estimate_sharpe};
pub use strategy::{EquityCurveStrategy, MonthlyReturnsStrategy, SharpeStrategy, SimplifiedStrategy};
pub use types::{SharpeInputs, SharpeMethod, SharpeResult, StrategyAttempt};
