//! Kelly criterion from win rate and average win/loss.

use tracing::debug;

use super::types::{AGGRESSIVE_KELLY_FRACTION, KellyAdvisory, KellyResult};
use crate::error::{CalcError, Unavailable, require_positive};
use crate::metrics::TradeStats;
use crate::metrics::constants::HUNDRED;

/// Calculate full, half and quarter Kelly fractions.
///
/// Kelly = W - (1 - W) / R, where W is the win rate and R the payoff ratio.
/// A negative result is returned as-is with a `NoEdge` advisory.
///
/// # Arguments
///
/// * `win_rate` - Fraction of winning trades, in (0, 1]
/// * `avg_win` - Average winning trade, > 0
/// * `avg_loss` - Average losing trade; sign is ignored, must be non-zero
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if any argument is outside its domain.
pub fn kelly_criterion(
    win_rate: f64,
    avg_win: f64,
    avg_loss: f64,
) -> Result<KellyResult, CalcError> {
    if !(win_rate.is_finite() && win_rate > 0.0 && win_rate <= 1.0) {
        return Err(CalcError::invalid("win_rate", win_rate, "a fraction in (0, 1]"));
    }
    let avg_win = require_positive("avg_win", avg_win)?;
    let avg_loss = require_positive("avg_loss", avg_loss.abs())?;

    let loss_rate = 1.0 - win_rate;
    let payoff_ratio = avg_win / avg_loss;
    let full = win_rate - loss_rate / payoff_ratio;
    let expectancy = win_rate.mul_add(avg_win, -(loss_rate * avg_loss));

    let advisory = if full <= 0.0 {
        Some(KellyAdvisory::NoEdge)
    } else if full > AGGRESSIVE_KELLY_FRACTION {
        Some(KellyAdvisory::Aggressive)
    } else {
        None
    };

    debug!(full, payoff_ratio, expectancy, ?advisory, "Kelly fraction calculated");

    Ok(KellyResult {
        full_kelly_percent: full * HUNDRED,
        half_kelly_percent: full / 2.0 * HUNDRED,
        quarter_kelly_percent: full / 4.0 * HUNDRED,
        payoff_ratio,
        expectancy,
        advisory,
    })
}

/// Kelly fractions from realized trade statistics.
///
/// Statistics that cannot support a Kelly estimate are a data outcome, not a
/// caller error, so they come back as an [`Unavailable`] reason.
///
/// # Errors
///
/// Returns the reason when there are no trades, no wins or no losses, or
/// when the averages overflowed.
pub fn kelly_from_trade_stats(stats: &TradeStats) -> Result<KellyResult, Unavailable> {
    if stats.total_trades == 0 {
        return Err(Unavailable::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if stats.losing_trades == 0 {
        return Err(Unavailable::ZeroDenominator {
            divisor: "average loss",
        });
    }
    if stats.winning_trades == 0 {
        return Err(Unavailable::ZeroDenominator {
            divisor: "payoff ratio",
        });
    }

    kelly_criterion(stats.win_rate, stats.avg_win, stats.avg_loss).map_err(|e| {
        debug!(error = %e, "Trade statistics out of range for Kelly");
        Unavailable::NotFinite {
            quantity: "average trade",
        }
    })
}
