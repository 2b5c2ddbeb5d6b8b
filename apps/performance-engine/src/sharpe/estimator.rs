//! Sharpe estimator trying strategies in fixed priority order.

use tracing::debug;

use super::strategy::{
    EquityCurveStrategy, MonthlyReturnsStrategy, SharpeStrategy, SimplifiedStrategy,
};
use super::types::{SharpeInputs, SharpeMethod, SharpeResult, StrategyAttempt};
use crate::error::Unavailable;
use crate::metrics::constants::DEFAULT_RISK_FREE_RATE;

/// Annualized Sharpe estimator.
///
/// Strategies run in priority order and the first one that yields a value
/// wins. The default order is monthly returns, then equity curve, then the
/// simplified fallback.
#[derive(Debug)]
pub struct SharpeEstimator {
    strategies: Vec<Box<dyn SharpeStrategy>>,
}

impl Default for SharpeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SharpeEstimator {
    /// Create an estimator with the default strategy order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(MonthlyReturnsStrategy),
            Box::new(EquityCurveStrategy),
            Box::new(SimplifiedStrategy),
        ])
    }

    /// Create an estimator with a custom strategy order.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn SharpeStrategy>>) -> Self {
        Self { strategies }
    }

    /// Estimate with the default 2% annual risk-free rate.
    #[must_use]
    pub fn estimate_default(&self, inputs: &SharpeInputs<'_>) -> SharpeResult {
        self.estimate(inputs, DEFAULT_RISK_FREE_RATE)
    }

    /// Estimate the annualized Sharpe ratio.
    ///
    /// Never fails: when no strategy produces a value the ratio is `None`,
    /// `method` names the last strategy whose minimum data requirement was met
    /// (or `None` if none was), and `attempts` explains every skip.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Whatever return data is available
    /// * `risk_free_rate` - Annual risk-free rate as a fraction (0.02 = 2%)
    #[must_use]
    pub fn estimate(&self, inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> SharpeResult {
        let mut attempts = Vec::new();
        let mut furthest = SharpeMethod::None;

        for strategy in &self.strategies {
            let method = strategy.method();

            if let Err(reason) = strategy.check(inputs) {
                debug!(%method, %reason, "Sharpe strategy not applicable");
                attempts.push(StrategyAttempt { method, reason });
                continue;
            }
            furthest = method;

            match strategy.compute(inputs, risk_free_rate) {
                Ok(ratio) if ratio.is_finite() => {
                    debug!(%method, ratio, "Sharpe ratio estimated");
                    return SharpeResult {
                        sharpe_ratio: Some(ratio),
                        method,
                        attempts,
                    };
                }
                Ok(ratio) => {
                    debug!(%method, ratio, "Sharpe strategy produced a non-finite value");
                    attempts.push(StrategyAttempt {
                        method,
                        reason: Unavailable::ZeroDenominator { divisor: "return dispersion" },
                    });
                }
                Err(reason) => {
                    debug!(%method, %reason, "Sharpe strategy could not compute");
                    attempts.push(StrategyAttempt { method, reason });
                }
            }
        }

        SharpeResult {
            sharpe_ratio: None,
            method: furthest,
            attempts,
        }
    }
}

/// Estimate with the default strategies.
///
/// # Arguments
///
/// * `inputs` - Whatever return data is available
/// * `risk_free_rate` - Annual risk-free rate as a fraction (0.02 = 2%)
#[must_use]
pub fn estimate_sharpe(inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> SharpeResult {
    SharpeEstimator::new().estimate(inputs, risk_free_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{EquityPoint, MonthlyReturn, ReturnSummary};
    use chrono::NaiveDate;

    fn monthly(values: &[f64]) -> Vec<MonthlyReturn> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| MonthlyReturn::new(2023 + (i / 12) as i32, (i % 12) as u32 + 1, *v))
            .collect()
    }

    fn curve(values: &[f64]) -> Vec<EquityPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EquityPoint::new(start + chrono::Days::new(i as u64), *v))
            .collect()
    }

    fn summary() -> ReturnSummary {
        ReturnSummary {
            total_return_percent: 12.0,
            period_days: 180.0,
            max_drawdown_percent: 8.0,
        }
    }

    #[test]
    fn test_monthly_has_priority() {
        let returns = monthly(&[1.0, -0.5, 2.0, 0.8]);
        let points = curve(&[100.0, 101.0, 99.0, 103.0, 104.0, 102.0, 106.0, 107.0, 105.0, 109.0]);
        let inputs = SharpeInputs::default()
            .with_monthly_returns(&returns)
            .with_equity_curve(&points)
            .with_summary(summary());

        let result = SharpeEstimator::new().estimate_default(&inputs);
        assert_eq!(result.method, SharpeMethod::MonthlyReturns);
        assert!(result.sharpe_ratio.is_some());
        assert!(result.attempts.is_empty());
    }

    #[test]
    fn test_falls_through_to_equity_curve() {
        let returns = monthly(&[1.0, 2.0]);
        let points = curve(&[100.0, 101.0, 99.0, 103.0, 104.0, 102.0, 106.0, 107.0, 105.0, 109.0]);
        let inputs = SharpeInputs::default()
            .with_monthly_returns(&returns)
            .with_equity_curve(&points);

        let result = SharpeEstimator::new().estimate_default(&inputs);
        assert_eq!(result.method, SharpeMethod::EquityCurve);
        assert!(result.sharpe_ratio.is_some());
        assert_eq!(result.attempts.len(), 1);
        assert_eq!(result.attempts[0].method, SharpeMethod::MonthlyReturns);
    }

    #[test]
    fn test_zero_variance_falls_through_to_simplified() {
        let returns = monthly(&[1.0, 1.0, 1.0]);
        let inputs = SharpeInputs::default()
            .with_monthly_returns(&returns)
            .with_summary(summary());

        let result = SharpeEstimator::new().estimate_default(&inputs);
        assert_eq!(result.method, SharpeMethod::Simplified);
        // (12 / 180 * 365 - 2) / 16
        let expected = (12.0 / 180.0 * 365.0 - 2.0) / 16.0;
        assert!((result.sharpe_ratio.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_alone_reports_monthly_method() {
        let returns = monthly(&[1.0, 1.0, 1.0]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);

        let result = SharpeEstimator::new().estimate_default(&inputs);
        assert_eq!(result.sharpe_ratio, None);
        assert_eq!(result.method, SharpeMethod::MonthlyReturns);
        assert_eq!(result.reason(), Some(&Unavailable::ZeroVariance));
    }

    #[test]
    fn test_nothing_applicable() {
        let result = SharpeEstimator::new().estimate_default(&SharpeInputs::default());
        assert_eq!(result.sharpe_ratio, None);
        assert_eq!(result.method, SharpeMethod::None);
        assert_eq!(result.attempts.len(), 3);
        assert!(result.attempts.iter().all(|a| a.reason.is_insufficient()));
    }

    #[derive(Debug)]
    struct FixedStrategy(f64);

    impl SharpeStrategy for FixedStrategy {
        fn method(&self) -> SharpeMethod {
            SharpeMethod::Simplified
        }

        fn check(&self, _inputs: &SharpeInputs<'_>) -> Result<(), Unavailable> {
            Ok(())
        }

        fn compute(&self, _inputs: &SharpeInputs<'_>, _rf: f64) -> Result<f64, Unavailable> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_custom_strategy_order() {
        let estimator = SharpeEstimator::with_strategies(vec![
            Box::new(FixedStrategy(f64::NAN)),
            Box::new(FixedStrategy(0.75)),
        ]);
        let result = estimator.estimate_default(&SharpeInputs::default());

        assert_eq!(result.sharpe_ratio, Some(0.75));
        assert_eq!(result.attempts.len(), 1);
        assert_eq!(
            result.attempts[0].reason,
            Unavailable::ZeroDenominator { divisor: "return dispersion" }
        );
    }

    #[test]
    fn test_estimate_sharpe_matches_estimator() {
        let returns = monthly(&[3.0, -1.0, 2.0, 4.0, 0.5]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);
        let a = estimate_sharpe(&inputs, 0.03);
        let b = SharpeEstimator::new().estimate(&inputs, 0.03);
        assert_eq!(a, b);
    }
}
