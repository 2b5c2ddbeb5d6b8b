//! Profit-consistency compliance check.
//!
//! Prop-firm evaluations commonly require that no single day's profit exceed
//! a set share (often 20%) of total profit. Two entry points share one result
//! shape:
//!
//! - [`evaluate_from_daily`]: actual daily P&L (use [`aggregate_daily`] to
//!   collapse per-trade journal rows first)
//! - [`evaluate_from_stats`]: estimate from win/loss counts, risk and RR

mod aggregate;
mod evaluator;
mod types;

pub use aggregate::aggregate_daily;
pub use evaluator::{evaluate_from_daily, evaluate_from_stats};
pub use types::{ConsistencyResult, ConsistencySource};
