//! Budgeting period representation
//!
//! A period is a budgeting interval (typically one calendar month) with the
//! income available for that interval.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::PeriodId;
use super::money::Rupiah;

/// A budgeting interval and its income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Unique, immutable identifier
    pub id: PeriodId,

    /// Display name (e.g. "November 2025")
    pub name: String,

    /// First day of the period (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive)
    pub end_date: NaiveDate,

    /// Income available in this period
    pub income_amount: Rupiah,
}

impl Period {
    /// Create a new period with a fresh ID
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        income_amount: Rupiah,
    ) -> Self {
        Self {
            id: PeriodId::new(),
            name: name.into(),
            start_date,
            end_date,
            income_amount,
        }
    }

    /// Create a period spanning the calendar month containing `date`
    ///
    /// The name is derived from the month (e.g. "November 2025").
    pub fn month_of(date: NaiveDate, income_amount: Rupiah) -> Self {
        let (start, end) = month_bounds(date);
        Self::new(start.format("%B %Y").to_string(), start, end, income_amount)
    }

    /// Check if a date falls within this period (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// First and last day of the calendar month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap());
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month.unwrap() - Duration::days(1);
    (start, end)
}
