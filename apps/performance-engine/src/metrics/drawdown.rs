//! Peak-to-trough drawdown over an equity curve.

use super::constants::HUNDRED;
use super::types::EquityPoint;

/// Sort a copy of the curve by date. Duplicate dates are kept.
pub(crate) fn sorted_by_date(points: &[EquityPoint]) -> Vec<EquityPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);
    sorted
}

/// Largest peak-to-trough decline, in percent of the peak.
///
/// Returns `None` for fewer than 2 points or when no positive peak exists.
/// A curve that never declines returns `Some(0.0)`.
pub fn max_drawdown_pct(points: &[EquityPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let sorted = sorted_by_date(points);
    let mut peak = f64::NEG_INFINITY;
    let mut max_drawdown = 0.0_f64;
    let mut saw_positive_peak = false;

    for point in sorted.iter().filter(|p| p.equity.is_finite()) {
        if point.equity > peak {
            peak = point.equity;
        }
        if peak > 0.0 {
            saw_positive_peak = true;
            let drawdown = (peak - point.equity) / peak * HUNDRED;
            max_drawdown = max_drawdown.max(drawdown);
        }
    }

    saw_positive_peak.then_some(max_drawdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn curve(values: &[f64]) -> Vec<EquityPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EquityPoint::new(start + chrono::Days::new(i as u64), *v))
            .collect()
    }

    #[test]
    fn test_max_drawdown() {
        let points = curve(&[100.0, 120.0, 90.0, 110.0, 130.0, 117.0]);
        let Some(dd) = max_drawdown_pct(&points) else {
            panic!("drawdown should be computed");
        };
        // 120 -> 90
        assert!((dd - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let mut points = curve(&[100.0, 120.0, 90.0]);
        points.reverse();
        let dd = max_drawdown_pct(&points).unwrap();
        assert!((dd - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_curve_has_zero_drawdown() {
        let points = curve(&[100.0, 101.0, 105.0]);
        assert_eq!(max_drawdown_pct(&points), Some(0.0));
    }

    #[test]
    fn test_too_short_or_non_positive() {
        assert_eq!(max_drawdown_pct(&curve(&[100.0])), None);
        assert_eq!(max_drawdown_pct(&curve(&[-5.0, -10.0])), None);
    }
}
