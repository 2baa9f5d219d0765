//! Display formatting helpers
//!
//! Pure string formatting for the presentation layer. Currency formatting
//! lives on [`crate::models::Rupiah`] as its `Display` impl; the helpers
//! here cover percentages and dates.

use chrono::NaiveDate;

/// Format a percentage with one decimal place (e.g. `12.5%`)
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a date as day, short month, year (e.g. `5 Nov 2025`)
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(12.5), "12.5%");
        assert_eq!(percent(33.333), "33.3%");
        assert_eq!(percent(100.0), "100.0%");
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(short_date(date), "5 Nov 2025");

        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(short_date(date), "31 Jan 2026");
    }
}
