//! Formatting utilities for advisory messages.

/// Format a percentage-point value (e.g., 83.333 -> "83.33%").
#[must_use]
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format an amount with 2 decimal places.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Format an optional ratio.
#[must_use]
pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(83.333_333), "83.33%");
        assert_eq!(format_amount(120.0), "120.00");
        assert_eq!(format_ratio(Some(2.345_6)), "2.35");
        assert_eq!(format_ratio(None), "N/A");
    }
}
