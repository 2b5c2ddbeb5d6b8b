//! Derive period figures from an equity curve.
//!
//! These feed the Sharpe strategies when the caller only has an equity curve:
//! month-end returns for the monthly method and a headline summary for the
//! simplified method.

use chrono::Datelike;
use tracing::debug;

use super::constants::HUNDRED;
use super::drawdown::{max_drawdown_pct, sorted_by_date};
use super::types::{EquityPoint, MonthlyReturn, ReturnSummary};

/// Total return, calendar length and max drawdown of an equity curve.
///
/// Returns `None` for fewer than 2 points or a non-positive starting equity.
pub fn summary_from_equity(points: &[EquityPoint]) -> Option<ReturnSummary> {
    if points.len() < 2 {
        return None;
    }

    let sorted = sorted_by_date(points);
    let (first, last) = (sorted.first()?, sorted.last()?);
    if !(first.equity.is_finite() && first.equity > 0.0 && last.equity.is_finite()) {
        debug!(start = first.equity, "Equity curve has no usable starting value");
        return None;
    }

    Some(ReturnSummary {
        total_return_percent: (last.equity - first.equity) / first.equity * HUNDRED,
        period_days: (last.date - first.date).num_days() as f64,
        max_drawdown_percent: max_drawdown_pct(&sorted).unwrap_or(0.0),
    })
}

/// Month-over-month percentage returns from month-end equity.
///
/// The first month is measured against the first observation. Months whose
/// reference equity is not positive are skipped.
pub fn monthly_returns_from_equity(points: &[EquityPoint]) -> Vec<MonthlyReturn> {
    let sorted = sorted_by_date(points);
    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    // Last observation of each (year, month), in date order.
    let mut month_ends: Vec<((i32, u32), f64)> = Vec::new();
    for point in sorted.iter().filter(|p| p.equity.is_finite()) {
        let key = (point.date.year(), point.date.month());
        match month_ends.last_mut() {
            Some(last) if last.0 == key => last.1 = point.equity,
            _ => month_ends.push((key, point.equity)),
        }
    }

    let mut reference = first.equity;
    let mut returns = Vec::with_capacity(month_ends.len());
    for ((year, month), equity) in month_ends {
        if reference > 0.0 {
            returns.push(MonthlyReturn::new(
                year,
                month,
                (equity - reference) / reference * HUNDRED,
            ));
        } else {
            debug!(year, month, reference, "Skipping month with non-positive reference equity");
        }
        reference = equity;
    }

    returns
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, d: u32, equity: f64) -> EquityPoint {
        EquityPoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), equity)
    }

    #[test]
    fn test_summary_from_equity() {
        let points = vec![
            point(2024, 1, 1, 10_000.0),
            point(2024, 2, 1, 12_000.0),
            point(2024, 3, 1, 9_000.0),
            point(2024, 4, 10, 11_000.0),
        ];
        let summary = summary_from_equity(&points).unwrap();

        assert!((summary.total_return_percent - 10.0).abs() < 1e-9);
        assert!((summary.period_days - 100.0).abs() < 1e-9);
        assert!((summary.max_drawdown_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_requires_positive_start() {
        assert!(summary_from_equity(&[point(2024, 1, 1, 0.0), point(2024, 1, 2, 5.0)]).is_none());
        assert!(summary_from_equity(&[point(2024, 1, 1, 100.0)]).is_none());
    }

    #[test]
    fn test_monthly_returns_use_month_end_equity() {
        let points = vec![
            point(2024, 1, 2, 1_000.0),
            point(2024, 1, 31, 1_100.0),
            point(2024, 2, 15, 1_000.0),
            point(2024, 2, 29, 1_210.0),
            point(2024, 3, 31, 1_089.0),
        ];
        let returns = monthly_returns_from_equity(&points);

        assert_eq!(returns.len(), 3);
        assert_eq!((returns[0].year, returns[0].month), (2024, 1));
        assert!((returns[0].return_percent - 10.0).abs() < 1e-9);
        assert!((returns[1].return_percent - 10.0).abs() < 1e-9);
        assert!((returns[2].return_percent + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_returns_empty() {
        assert!(monthly_returns_from_equity(&[]).is_empty());
    }
}
