//! The root store aggregate
//!
//! One store per installation: it owns every period, portion, and expense,
//! plus the active-period pointer. The persisted JSON document is shaped
//! exactly like this struct.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::expense::Expense;
use super::ids::{ExpenseId, PeriodId, PortionId};
use super::period::Period;
use super::portion::Portion;

/// Schema generation tag for the persisted document
pub const STORE_VERSION: &str = "1";

/// Root aggregate holding all budgeting data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Schema generation of this document
    pub version: String,

    /// When this store was first created (drives the retention policy)
    pub created_at: DateTime<Utc>,

    /// When this store was last loaded or saved
    pub last_used_at: DateTime<Utc>,

    /// All budgeting periods, in insertion order
    pub periods: Vec<Period>,

    /// All portions, in insertion order
    pub portions: Vec<Portion>,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// The period currently in focus, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_period_id: Option<PeriodId>,
}

impl Store {
    /// Create an empty store with no entities and no active period
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            version: STORE_VERSION.to_string(),
            created_at: now,
            last_used_at: now,
            periods: Vec::new(),
            portions: Vec::new(),
            expenses: Vec::new(),
            active_period_id: None,
        }
    }

    /// Look up a period by ID
    pub fn period(&self, id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// Look up a period by ID, mutably
    pub fn period_mut(&mut self, id: PeriodId) -> Option<&mut Period> {
        self.periods.iter_mut().find(|p| p.id == id)
    }

    /// Look up a portion by ID
    pub fn portion(&self, id: PortionId) -> Option<&Portion> {
        self.portions.iter().find(|p| p.id == id)
    }

    /// Look up a portion by ID, mutably
    pub fn portion_mut(&mut self, id: PortionId) -> Option<&mut Portion> {
        self.portions.iter_mut().find(|p| p.id == id)
    }

    /// Look up an expense by ID
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Look up an expense by ID, mutably
    pub fn expense_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Validate the store's internal consistency
    ///
    /// Checks that IDs are unique per entity kind and that every reference
    /// (`period_id`, `portion_id`, `active_period_id`) resolves to an
    /// existing entity. Applied to imported payloads so a dangling reference
    /// can never enter the store through that door.
    pub fn validate(&self) -> Result<(), String> {
        let mut period_ids = HashSet::new();
        for period in &self.periods {
            if !period_ids.insert(period.id) {
                return Err(format!("Duplicate period ID: {}", period.id));
            }
        }

        let mut portion_ids = HashSet::new();
        for portion in &self.portions {
            if !portion_ids.insert(portion.id) {
                return Err(format!("Duplicate portion ID: {}", portion.id));
            }
            if !period_ids.contains(&portion.period_id) {
                return Err(format!(
                    "Portion {} references unknown period {}",
                    portion.id, portion.period_id
                ));
            }
        }

        let mut expense_ids = HashSet::new();
        for expense in &self.expenses {
            if !expense_ids.insert(expense.id) {
                return Err(format!("Duplicate expense ID: {}", expense.id));
            }
            if !period_ids.contains(&expense.period_id) {
                return Err(format!(
                    "Expense {} references unknown period {}",
                    expense.id, expense.period_id
                ));
            }
            if !portion_ids.contains(&expense.portion_id) {
                return Err(format!(
                    "Expense {} references unknown portion {}",
                    expense.id, expense.portion_id
                ));
            }
        }

        if let Some(active) = self.active_period_id {
            if !period_ids.contains(&active) {
                return Err(format!("Active period {} does not exist", active));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rupiah;
    use chrono::NaiveDate;

    fn store_with_one_period() -> (Store, Period) {
        let mut store = Store::empty(Utc::now());
        let period = Period::month_of(
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            Rupiah::new(10_000_000),
        );
        store.periods.push(period.clone());
        store.active_period_id = Some(period.id);
        (store, period)
    }

    #[test]
    fn test_empty_store() {
        let store = Store::empty(Utc::now());
        assert_eq!(store.version, STORE_VERSION);
        assert!(store.periods.is_empty());
        assert!(store.active_period_id.is_none());
        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_lookups() {
        let (mut store, period) = store_with_one_period();
        let portion = Portion::new(period.id, "Makanan", Rupiah::new(3_000_000), None);
        store.portions.push(portion.clone());

        assert_eq!(store.period(period.id).unwrap().name, period.name);
        assert_eq!(store.portion(portion.id).unwrap().name, "Makanan");
        assert!(store.period(PeriodId::new()).is_none());
    }

    #[test]
    fn test_validate_dangling_portion() {
        let (mut store, _) = store_with_one_period();
        store
            .portions
            .push(Portion::new(PeriodId::new(), "Orphan", Rupiah::new(1), None));

        let err = store.validate().unwrap_err();
        assert!(err.contains("unknown period"));
    }

    #[test]
    fn test_validate_dangling_expense() {
        let (mut store, period) = store_with_one_period();
        store.expenses.push(Expense::new(
            period.id,
            PortionId::new(),
            NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            "Orphan",
            Rupiah::new(1),
        ));

        let err = store.validate().unwrap_err();
        assert!(err.contains("unknown portion"));
    }

    #[test]
    fn test_validate_dangling_active_period() {
        let (mut store, _) = store_with_one_period();
        store.active_period_id = Some(PeriodId::new());

        let err = store.validate().unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_validate_duplicate_period_id() {
        let (mut store, period) = store_with_one_period();
        store.periods.push(period);

        let err = store.validate().unwrap_err();
        assert!(err.contains("Duplicate period ID"));
    }

    #[test]
    fn test_serialization_field_names() {
        let (store, _) = store_with_one_period();
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.contains("\"version\":\"1\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"lastUsedAt\""));
        assert!(json.contains("\"activePeriodId\""));
    }
}
