//! Statistical math utilities for performance metric calculations.

use tracing::warn;

use super::constants::TOLERANCE;

/// Calculate mean of a slice of values.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Calculate sample standard deviation (denominator `n - 1`).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let variance_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    let variance = variance_sum / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

/// Whether a standard deviation is indistinguishable from zero.
///
/// A constant-growth series differenced in floating point leaves residue
/// around 1e-15, far below the absolute floor.
pub fn is_zero_dispersion(std_dev: f64) -> bool {
    std_dev <= TOLERANCE
}

/// Drop NaN and infinite samples, logging how many were discarded.
pub fn finite_only(values: impl IntoIterator<Item = f64>, series: &'static str) -> Vec<f64> {
    let mut dropped = 0usize;
    let kept: Vec<f64> = values
        .into_iter()
        .filter(|v| {
            let ok = v.is_finite();
            if !ok {
                dropped += 1;
            }
            ok
        })
        .collect();

    if dropped > 0 {
        warn!(series, dropped, "Discarded non-finite samples");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_std_dev_uses_sample_denominator() {
        let Some(std) = std_dev(&[10.0, 20.0, 30.0, 40.0]) else {
            panic!("std_dev should succeed for four values");
        };
        // sqrt(500 / 3)
        assert!(approx(std, 12.909_944_487_358_056));
    }

    #[test]
    fn test_std_dev_needs_two_values() {
        assert_eq!(std_dev(&[5.0]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_zero_dispersion() {
        assert!(is_zero_dispersion(0.0));
        assert!(is_zero_dispersion(3e-15));
        assert!(!is_zero_dispersion(0.01));
    }

    #[test]
    fn test_small_dispersion_around_large_mean_is_not_zero() {
        let values = [1000.0, 1000.000_000_2, 1000.000_000_4];
        let std = std_dev(&values).unwrap();

        assert!(std > 1e-7);
        assert!(!is_zero_dispersion(std));
    }

    #[test]
    fn test_finite_only() {
        let kept = finite_only([1.0, f64::NAN, 2.0, f64::INFINITY], "test");
        assert_eq!(kept, vec![1.0, 2.0]);
    }
}
