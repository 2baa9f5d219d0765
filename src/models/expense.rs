//! Expense record representation
//!
//! An expense is a single spending record attributed to one portion within
//! one period. Expenses are leaf entities: nothing references them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, PeriodId, PortionId};
use super::money::Rupiah;

/// A spending record scoped to one period and one portion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique, immutable identifier
    pub id: ExpenseId,

    /// The period this expense belongs to
    pub period_id: PeriodId,

    /// The portion this expense is attributed to
    pub portion_id: PortionId,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount spent
    pub amount: Rupiah,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        period_id: PeriodId,
        portion_id: PortionId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Rupiah,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            period_id,
            portion_id,
            date,
            description: description.into(),
            amount,
        }
    }
}
