//! Profit-consistency rule: no single day may exceed a share of total profit.

use tracing::debug;

use super::types::{ConsistencyResult, ConsistencySource};
use crate::error::{CalcError, Unavailable, require_non_negative};
use crate::metrics::constants::{HUNDRED, MIN_DAILY_ENTRIES};
use crate::metrics::math::finite_only;
use crate::metrics::{BacktestStatsSummary, DailyPnlEntry, format_amount, format_pct};

/// Raw figures before the pass/fail decision.
struct Tally {
    best_day_profit: f64,
    total_profit: f64,
    profitable_days: u32,
    losing_days: u32,
    source: ConsistencySource,
}

fn validate_threshold(threshold_pct: f64) -> Result<f64, CalcError> {
    if threshold_pct.is_finite() && threshold_pct > 0.0 && threshold_pct <= HUNDRED {
        Ok(threshold_pct)
    } else {
        Err(CalcError::invalid(
            "threshold_pct",
            threshold_pct,
            "a percentage in (0, 100]",
        ))
    }
}

/// Evaluate the rule against a daily P&L series.
///
/// The best day is the largest non-negative entry. Zero-P&L days count as
/// neither profitable nor losing. A series with fewer than 2 entries, or with
/// zero or negative total profit, is indeterminate and does not pass.
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if `threshold_pct` is not in (0, 100].
pub fn evaluate_from_daily(
    entries: &[DailyPnlEntry],
    threshold_pct: f64,
) -> Result<ConsistencyResult, CalcError> {
    let threshold = validate_threshold(threshold_pct)?;
    let pnls = finite_only(entries.iter().map(|e| e.pnl), "daily pnl");

    let tally = Tally {
        best_day_profit: pnls.iter().copied().filter(|p| *p >= 0.0).fold(0.0, f64::max),
        total_profit: pnls.iter().sum(),
        profitable_days: pnls.iter().filter(|p| **p > 0.0).count() as u32,
        losing_days: pnls.iter().filter(|p| **p < 0.0).count() as u32,
        source: ConsistencySource::DailyPnl,
    };

    let insufficient = (pnls.len() < MIN_DAILY_ENTRIES).then_some(Unavailable::InsufficientData {
        required: MIN_DAILY_ENTRIES,
        actual: pnls.len(),
    });

    Ok(decide(tally, threshold, insufficient, String::new()))
}

/// Estimate the rule from aggregate backtest statistics.
///
/// Assumes every winning trade returns exactly `risk_percent * rr_ratio` and
/// every losing trade costs exactly `risk_percent`, so the best "day" is one
/// idealized winner. Real trade distributions have fatter winners, which
/// this estimate cannot see; it understates the true best-day share.
/// Figures are in percent of the account, not currency.
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if `threshold_pct` is not in (0, 100]
/// or if `risk_percent` or `rr_ratio` is negative or non-finite.
pub fn evaluate_from_stats(
    summary: &BacktestStatsSummary,
    threshold_pct: f64,
) -> Result<ConsistencyResult, CalcError> {
    let threshold = validate_threshold(threshold_pct)?;
    let risk = require_non_negative("risk_percent", summary.risk_percent)?;
    let rr = require_non_negative("rr_ratio", summary.rr_ratio)?;

    let winning = f64::from(summary.winning_trades);
    let losing = f64::from(summary.losing_trades);
    let best = if summary.winning_trades > 0 { risk * rr } else { 0.0 };

    let tally = Tally {
        best_day_profit: best,
        total_profit: (winning * risk).mul_add(rr, -(losing * risk)),
        profitable_days: summary.winning_trades,
        losing_days: summary.losing_trades,
        source: ConsistencySource::StatsEstimate,
    };

    let traded = summary.winning_trades.saturating_add(summary.losing_trades);
    let insufficient = (summary.total_trades.max(traded) == 0)
        .then_some(Unavailable::InsufficientData {
            required: 1,
            actual: 0,
        });

    let preamble = format!(
        "Estimated from {} wins and {} losses at {} risk with 1:{} reward, \
         assuming every trade hits its target or stop exactly. ",
        summary.winning_trades,
        summary.losing_trades,
        format_pct(risk),
        format_amount(rr),
    );

    Ok(decide(tally, threshold, insufficient, preamble))
}

fn decide(
    tally: Tally,
    threshold: f64,
    insufficient: Option<Unavailable>,
    preamble: String,
) -> ConsistencyResult {
    let reason = insufficient.or_else(|| {
        if tally.profitable_days == 0 {
            Some(Unavailable::NoProfitableDays)
        } else if !tally.total_profit.is_finite() {
            Some(Unavailable::NotFinite {
                quantity: "total profit",
            })
        } else if tally.total_profit <= 0.0 {
            Some(Unavailable::non_positive_total(tally.total_profit))
        } else if !(tally.best_day_profit / tally.total_profit).is_finite() {
            Some(Unavailable::ZeroDenominator { divisor: "total profit" })
        } else {
            None
        }
    });

    let (consistency_percent, passed, explanation) = match reason {
        Some(ref reason) => {
            debug!(%reason, source = ?tally.source, "Consistency check indeterminate");
            (None, false, format!("Consistency cannot be evaluated. {reason}."))
        }
        None => {
            let pct = tally.best_day_profit / tally.total_profit * HUNDRED;
            let passed = pct <= threshold;
            (Some(pct), passed, verdict(&tally, pct, threshold, passed))
        }
    };

    ConsistencyResult {
        consistency_percent,
        passed,
        best_day_profit: tally.best_day_profit,
        total_profit: tally.total_profit,
        profitable_days: tally.profitable_days,
        losing_days: tally.losing_days,
        threshold,
        message: preamble + &explanation,
        reason,
        source: tally.source,
    }
}

fn verdict(tally: &Tally, pct: f64, threshold: f64, passed: bool) -> String {
    let share = format!(
        "Best day {} is {} of total profit {}",
        format_amount(tally.best_day_profit),
        format_pct(pct),
        format_amount(tally.total_profit),
    );

    if passed {
        format!("{share}, within the {} limit.", format_pct(threshold))
    } else {
        // Total profit needed for the current best day to sit at the limit.
        let required_total = tally.best_day_profit / threshold * HUNDRED;
        format!(
            "{share}, exceeding the {} limit. Total profit must reach {} before this day complies.",
            format_pct(threshold),
            format_amount(required_total),
        )
    }
}
