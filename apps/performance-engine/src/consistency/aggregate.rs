//! Collapse per-trade journal rows into one P&L entry per day.

use std::collections::BTreeMap;

use tracing::warn;

use crate::metrics::DailyPnlEntry;

/// Sum P&L per date, ordered by date.
///
/// Dates are compared as entered; ISO 8601 strings therefore sort
/// chronologically. Rows with a non-finite P&L are dropped.
pub fn aggregate_daily(rows: &[DailyPnlEntry]) -> Vec<DailyPnlEntry> {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();

    for row in rows {
        if !row.pnl.is_finite() {
            warn!(date = %row.date, "Dropping journal row with non-finite P&L");
            continue;
        }
        *by_date.entry(row.date.trim()).or_insert(0.0) += row.pnl;
    }

    by_date
        .into_iter()
        .map(|(date, pnl)| DailyPnlEntry::new(date, pnl))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_daily_sums_and_orders() {
        let rows = vec![
            DailyPnlEntry::new("2024-03-02", 40.0),
            DailyPnlEntry::new("2024-03-01", 100.0),
            DailyPnlEntry::new("2024-03-02", -15.0),
            DailyPnlEntry::new("2024-03-01", f64::NAN),
        ];
        let daily = aggregate_daily(&rows);

        assert_eq!(
            daily,
            vec![
                DailyPnlEntry::new("2024-03-01", 100.0),
                DailyPnlEntry::new("2024-03-02", 25.0),
            ]
        );
    }

    #[test]
    fn test_aggregate_daily_empty() {
        assert!(aggregate_daily(&[]).is_empty());
    }
}
