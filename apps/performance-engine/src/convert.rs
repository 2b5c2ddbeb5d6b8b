//! Conversion from decimal storage values to engine inputs.
//!
//! Persistence keeps money as `rust_decimal::Decimal`. The calculations run on
//! `f64`, so values cross over here, once, and fail loudly if they cannot be
//! represented.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::CalcError;
use crate::metrics::{DailyPnlEntry, EquityPoint};

/// Convert a decimal to `f64`.
///
/// # Errors
///
/// Returns `CalcError::InvalidParameter` if the value has no finite `f64`
/// representation.
pub fn to_f64(value: Decimal, name: &'static str) -> Result<f64, CalcError> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::invalid(name, f64::NAN, "representable as a finite f64"))
}

impl EquityPoint {
    /// Create an equity point from a decimal equity value.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidParameter` if the equity cannot be converted.
    pub fn from_decimal(date: NaiveDate, equity: Decimal) -> Result<Self, CalcError> {
        Ok(Self::new(date, to_f64(equity, "equity")?))
    }
}

impl DailyPnlEntry {
    /// Create a daily P&L entry from a decimal P&L value.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidParameter` if the P&L cannot be converted.
    pub fn from_decimal(date: impl Into<String>, pnl: Decimal) -> Result<Self, CalcError> {
        Ok(Self::new(date, to_f64(pnl, "pnl")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_f64() {
        let value = to_f64(dec!(1234.56), "amount").unwrap();
        assert!((value - 1234.56).abs() < 1e-9);

        let negative = to_f64(dec!(-0.0025), "amount").unwrap();
        assert!((negative + 0.0025).abs() < 1e-12);
    }

    #[test]
    fn test_equity_point_from_decimal() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let point = EquityPoint::from_decimal(date, dec!(25000.50)).unwrap();

        assert_eq!(point.date, date);
        assert!((point.equity - 25_000.5).abs() < 1e-9);
    }

    #[test]
    fn test_daily_entry_from_decimal() {
        let entry = DailyPnlEntry::from_decimal("2024-06-30", dec!(-312.75)).unwrap();

        assert_eq!(entry.date, "2024-06-30");
        assert!((entry.pnl + 312.75).abs() < 1e-9);
    }
}
