//! Interchangeable Sharpe estimation strategies.

use std::fmt::Debug;

use tracing::debug;

use super::types::{SharpeInputs, SharpeMethod};
use crate::error::Unavailable;
use crate::metrics::constants::{
    DAYS_PER_YEAR, HUNDRED, MIN_EQUITY_POINTS, MIN_MONTHLY_RETURNS, MIN_PERIOD_RETURNS,
    MONTHS_PER_YEAR, TRADING_DAYS,
};
use crate::metrics::math::{finite_only, is_zero_dispersion, mean, std_dev};
use crate::metrics::sorted_by_date;

/// One way of estimating an annualized Sharpe ratio.
pub trait SharpeStrategy: Debug + Send + Sync {
    /// Method this strategy reports.
    fn method(&self) -> SharpeMethod;

    /// Check whether the inputs meet this strategy's minimum requirements.
    ///
    /// # Errors
    ///
    /// Returns the reason the strategy does not apply.
    fn check(&self, inputs: &SharpeInputs<'_>) -> Result<(), Unavailable>;

    /// Compute the annualized ratio. Only called after `check` succeeds.
    ///
    /// # Errors
    ///
    /// Returns the reason no ratio can be produced from applicable data.
    fn compute(&self, inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> Result<f64, Unavailable>;

    /// Whether the inputs meet this strategy's minimum requirements.
    fn can_apply(&self, inputs: &SharpeInputs<'_>) -> bool {
        self.check(inputs).is_ok()
    }
}

/// Sharpe from `(mean - rf) / stdev` of periodic percentage returns.
fn periodic_sharpe(
    returns: &[f64],
    periodic_risk_free: f64,
    periods_per_year: f64,
) -> Result<f64, Unavailable> {
    let (Some(avg), Some(std)) = (mean(returns), std_dev(returns)) else {
        return Err(Unavailable::InsufficientData {
            required: 2,
            actual: returns.len(),
        });
    };

    if is_zero_dispersion(std) {
        return Err(Unavailable::ZeroVariance);
    }

    let periodic = (avg - periodic_risk_free) / std;
    Ok(periodic * periods_per_year.sqrt())
}

/// Monthly-returns method: needs at least 3 monthly samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyReturnsStrategy;

impl MonthlyReturnsStrategy {
    fn returns(inputs: &SharpeInputs<'_>) -> Vec<f64> {
        inputs.monthly_returns.map_or_else(Vec::new, |r| {
            finite_only(r.iter().map(|m| m.return_percent), "monthly returns")
        })
    }
}

impl SharpeStrategy for MonthlyReturnsStrategy {
    fn method(&self) -> SharpeMethod {
        SharpeMethod::MonthlyReturns
    }

    fn check(&self, inputs: &SharpeInputs<'_>) -> Result<(), Unavailable> {
        if inputs.monthly_returns.is_none() {
            return Err(Unavailable::MissingInput { input: "monthly returns" });
        }
        let actual = Self::returns(inputs).len();
        if actual < MIN_MONTHLY_RETURNS {
            return Err(Unavailable::InsufficientData {
                required: MIN_MONTHLY_RETURNS,
                actual,
            });
        }
        Ok(())
    }

    fn compute(&self, inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> Result<f64, Unavailable> {
        let returns = Self::returns(inputs);
        // Percentage points, matching the scale of the returns.
        let monthly_risk_free = risk_free_rate / MONTHS_PER_YEAR * HUNDRED;
        periodic_sharpe(&returns, monthly_risk_free, MONTHS_PER_YEAR)
    }
}

/// Equity-curve method: needs at least 10 equity points.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquityCurveStrategy;

impl EquityCurveStrategy {
    /// Simple period-over-period percentage returns, in date order.
    ///
    /// Steps from a non-positive equity are skipped.
    fn period_returns(inputs: &SharpeInputs<'_>) -> Vec<f64> {
        let Some(curve) = inputs.equity_curve else {
            return Vec::new();
        };
        let sorted = sorted_by_date(curve);
        let equities = finite_only(sorted.iter().map(|p| p.equity), "equity curve");

        equities
            .windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| (w[1] - w[0]) / w[0] * HUNDRED)
            .collect()
    }
}

impl SharpeStrategy for EquityCurveStrategy {
    fn method(&self) -> SharpeMethod {
        SharpeMethod::EquityCurve
    }

    fn check(&self, inputs: &SharpeInputs<'_>) -> Result<(), Unavailable> {
        let Some(curve) = inputs.equity_curve else {
            return Err(Unavailable::MissingInput { input: "equity curve" });
        };
        if curve.len() < MIN_EQUITY_POINTS {
            return Err(Unavailable::InsufficientData {
                required: MIN_EQUITY_POINTS,
                actual: curve.len(),
            });
        }
        Ok(())
    }

    fn compute(&self, inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> Result<f64, Unavailable> {
        let returns = Self::period_returns(inputs);
        if returns.len() < MIN_PERIOD_RETURNS {
            debug!(returns = returns.len(), "Too few usable equity steps");
            return Err(Unavailable::InsufficientData {
                required: MIN_PERIOD_RETURNS,
                actual: returns.len(),
            });
        }

        let daily_risk_free = risk_free_rate / TRADING_DAYS * HUNDRED;
        periodic_sharpe(&returns, daily_risk_free, TRADING_DAYS)
    }
}

/// Simplified fallback from headline return and drawdown.
///
/// Volatility is approximated as twice the absolute max drawdown. This is a
/// rule of thumb kept for compatibility with stored results, not a dispersion
/// estimate; treat the output as a rough ranking signal only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedStrategy;

impl SharpeStrategy for SimplifiedStrategy {
    fn method(&self) -> SharpeMethod {
        SharpeMethod::Simplified
    }

    fn check(&self, inputs: &SharpeInputs<'_>) -> Result<(), Unavailable> {
        let Some(summary) = inputs.summary else {
            return Err(Unavailable::MissingInput { input: "return summary" });
        };
        if !(summary.period_days.is_finite() && summary.period_days > 0.0) {
            return Err(Unavailable::ZeroDenominator { divisor: "period length" });
        }
        if !summary.max_drawdown_percent.is_finite() || summary.max_drawdown_percent == 0.0 {
            return Err(Unavailable::ZeroDenominator { divisor: "max drawdown" });
        }
        if !summary.total_return_percent.is_finite() {
            return Err(Unavailable::MissingInput { input: "finite total return" });
        }
        Ok(())
    }

    fn compute(&self, inputs: &SharpeInputs<'_>, risk_free_rate: f64) -> Result<f64, Unavailable> {
        let summary = inputs
            .summary
            .ok_or(Unavailable::MissingInput { input: "return summary" })?;

        let annualized_return = summary.total_return_percent / summary.period_days * DAYS_PER_YEAR;
        let estimated_volatility = summary.max_drawdown_percent.abs() * 2.0;
        let risk_free_pct = risk_free_rate * HUNDRED;

        Ok((annualized_return - risk_free_pct) / estimated_volatility)
    }
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
            .map(|(i, v)| MonthlyReturn::new(2024, i as u32 % 12 + 1, *v))
            .collect()
    }

    fn curve(values: &[f64]) -> Vec<EquityPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EquityPoint::new(start + chrono::Days::new(i as u64), *v))
            .collect()
    }

    #[test]
    fn test_monthly_sharpe_value() {
        let returns = monthly(&[2.0, 4.0, 6.0]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);

        let strategy = MonthlyReturnsStrategy;
        assert!(strategy.can_apply(&inputs));
        let sharpe = strategy.compute(&inputs, 0.0).unwrap();

        // mean 4, sample std 2, monthly 2.0, annualized 2 * sqrt(12)
        assert!((sharpe - 2.0 * 12f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_risk_free_in_percentage_points() {
        let returns = monthly(&[2.0, 4.0, 6.0]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);
        let sharpe = MonthlyReturnsStrategy.compute(&inputs, 0.12).unwrap();

        // 12% annual -> 1 percentage point per month
        assert!((sharpe - 1.5 * 12f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_requires_three_samples() {
        let returns = monthly(&[2.0, 4.0]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);
        assert_eq!(
            MonthlyReturnsStrategy.check(&inputs),
            Err(Unavailable::InsufficientData {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_monthly_constant_series_is_zero_variance() {
        let returns = monthly(&[1.5, 1.5, 1.5, 1.5]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);
        assert_eq!(
            MonthlyReturnsStrategy.compute(&inputs, 0.02),
            Err(Unavailable::ZeroVariance)
        );
    }

    #[test]
    fn test_monthly_small_spread_around_large_returns() {
        let returns = monthly(&[1000.0, 1000.000_000_2, 1000.000_000_4]);
        let inputs = SharpeInputs::default().with_monthly_returns(&returns);

        let Ok(sharpe) = MonthlyReturnsStrategy.compute(&inputs, 0.02) else {
            panic!("should compute with non-zero dispersion");
        };
        assert!(sharpe.is_finite());
        assert!(sharpe > 0.0);
    }

    #[test]
    fn test_equity_curve_sorts_before_differencing() {
        let values = [100.0, 102.0, 101.0, 105.0, 104.0, 108.0, 107.0, 111.0, 110.0, 115.0];
        let ordered = curve(&values);
        let mut shuffled = ordered.clone();
        shuffled.reverse();
        shuffled.swap(2, 7);

        let a = EquityCurveStrategy
            .compute(&SharpeInputs::default().with_equity_curve(&ordered), 0.02)
            .unwrap();
        let b = EquityCurveStrategy
            .compute(&SharpeInputs::default().with_equity_curve(&shuffled), 0.02)
            .unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_equity_curve_skips_non_positive_steps() {
        let mut values = vec![0.0; 9];
        values.push(100.0);
        let points = curve(&values);
        let inputs = SharpeInputs::default().with_equity_curve(&points);

        assert!(EquityCurveStrategy.can_apply(&inputs));
        assert_eq!(
            EquityCurveStrategy.compute(&inputs, 0.02),
            Err(Unavailable::InsufficientData {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_simplified_formula() {
        let summary = ReturnSummary {
            total_return_percent: 20.0,
            period_days: 365.0,
            max_drawdown_percent: -10.0,
        };
        let inputs = SharpeInputs::default().with_summary(summary);
        let sharpe = SimplifiedStrategy.compute(&inputs, 0.02).unwrap();

        // (20 - 2) / 20
        assert!((sharpe - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_simplified_requirements() {
        let base = ReturnSummary {
            total_return_percent: 20.0,
            period_days: 0.0,
            max_drawdown_percent: 5.0,
        };
        let inputs = SharpeInputs::default().with_summary(base);
        assert_eq!(
            SimplifiedStrategy.check(&inputs),
            Err(Unavailable::ZeroDenominator { divisor: "period length" })
        );

        let no_drawdown = ReturnSummary {
            period_days: 30.0,
            max_drawdown_percent: 0.0,
            ..base
        };
        let inputs = SharpeInputs::default().with_summary(no_drawdown);
        assert!(!SimplifiedStrategy.can_apply(&inputs));
    }
}
