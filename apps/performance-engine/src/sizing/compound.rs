//! Compound growth projection under a constant periodic return.

use super::types::{CompoundProjection, ProjectionPeriod};
use crate::error::{CalcError, require_positive};
use crate::metrics::constants::{HUNDRED, MAX_BREAKDOWN_PERIODS};

/// Project capital growth over `num_periods` periods.
///
/// The headline figures always cover every period; the breakdown itemizes at
/// most the first 24.
///
/// # Arguments
///
/// * `starting_capital` - Capital at period 0, > 0
/// * `periodic_return` - Return per period as a fraction (0.05 = 5%), > 0
/// * `num_periods` - Number of periods, > 0
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if any argument is not positive.
pub fn project_compound_growth(
    starting_capital: f64,
    periodic_return: f64,
    num_periods: u32,
) -> Result<CompoundProjection, CalcError> {
    let starting_capital = require_positive("starting_capital", starting_capital)?;
    let periodic_return = require_positive("periodic_return", periodic_return)?;
    if num_periods == 0 {
        return Err(CalcError::invalid("num_periods", 0.0, "greater than 0"));
    }

    let growth = 1.0 + periodic_return;
    let final_capital = starting_capital * growth.powf(f64::from(num_periods));
    let total_profit = final_capital - starting_capital;

    let breakdown = (1..=num_periods.min(MAX_BREAKDOWN_PERIODS))
        .scan(starting_capital, |capital, period| {
            *capital *= growth;
            Some(ProjectionPeriod {
                period,
                capital: *capital,
                profit: *capital - starting_capital,
            })
        })
        .collect();

    Ok(CompoundProjection {
        final_capital,
        total_profit,
        total_return_percent: total_profit / starting_capital * HUNDRED,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_periods() {
        let projection = project_compound_growth(10_000.0, 0.05, 12).unwrap();

        assert!((projection.final_capital - 17_958.563_260_221_3).abs() < 1e-6);
        assert!((projection.total_profit - 7_958.563_260_221_3).abs() < 1e-6);
        assert!((projection.total_return_percent - 79.585_632_602_213).abs() < 1e-6);
        assert_eq!(projection.breakdown.len(), 12);

        let first = projection.breakdown[0];
        assert_eq!(first.period, 1);
        assert!((first.capital - 10_500.0).abs() < 1e-9);
        assert!((first.profit - 500.0).abs() < 1e-9);

        let last = projection.breakdown[11];
        assert!((last.capital - projection.final_capital).abs() < 1e-6);
    }

    #[test]
    fn test_breakdown_is_capped() {
        let projection = project_compound_growth(1_000.0, 0.01, 60).unwrap();

        assert_eq!(projection.breakdown.len(), 24);
        assert_eq!(projection.breakdown[23].period, 24);
        // Headline covers all 60 periods.
        assert!((projection.final_capital - 1_000.0 * 1.01f64.powi(60)).abs() < 1e-6);
        assert!(projection.final_capital > projection.breakdown[23].capital);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(project_compound_growth(0.0, 0.05, 12).is_err());
        assert!(project_compound_growth(1_000.0, 0.0, 12).is_err());
        assert!(project_compound_growth(1_000.0, -0.05, 12).is_err());
        assert!(project_compound_growth(1_000.0, 0.05, 0).is_err());
    }
}
