//! Sizing and growth calculators.
//!
//! Stateless, single-call functions:
//! - [`kelly_criterion`]: optimal bet fraction from win rate and payoff
//!   ([`kelly_from_trade_stats`] for realized trades)
//! - [`project_compound_growth`]: capital growth under a fixed periodic return
//! - [`PositionSizer`]: lots and units for a stop-defined risk budget
//!
//! Invalid inputs are caller contract violations and return
//! [`CalcError`](crate::CalcError).

mod compound;
mod kelly;
mod position;
mod types;

pub use compound::project_compound_growth;
pub use kelly::{kelly_criterion, kelly_from_trade_stats};
pub use position::{PositionSizer, PositionSizerConfig};
pub use types::{
    AGGRESSIVE_KELLY_FRACTION, CompoundProjection, KellyAdvisory, KellyResult, PositionSize,
    ProjectionPeriod,
};
