//! Data-access facade
//!
//! [`StoreService`] owns the in-memory copy of the store and its storage
//! slot. Every mutation updates memory first and then persists the whole
//! store; every query recomputes from memory. The service is constructed
//! over an explicit [`StoreStorage`], so tests (or a multi-profile UI) can
//! run any number of independent stores side by side.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::error::{DompetError, DompetResult};
use crate::models::{Expense, ExpenseId, Period, PeriodId, Portion, PortionId, Rupiah, Store};
use crate::storage::{self, seed, LoadOutcome, StoreStorage};
use crate::summary::{self, PeriodSummary, PortionSummary};

/// Fields for creating a period
#[derive(Debug, Clone)]
pub struct NewPeriod {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub income_amount: Rupiah,
}

/// Partial update for a period; absent fields stay unchanged
#[derive(Debug, Clone, Default)]
pub struct PeriodPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub income_amount: Option<Rupiah>,
}

/// Fields for creating a portion
#[derive(Debug, Clone)]
pub struct NewPortion {
    pub period_id: PeriodId,
    pub name: String,
    pub budget_amount: Rupiah,
    pub notes: Option<String>,
}

/// Partial update for a portion; absent fields stay unchanged
#[derive(Debug, Clone, Default)]
pub struct PortionPatch {
    pub name: Option<String>,
    pub budget_amount: Option<Rupiah>,
    pub notes: Option<String>,
}

/// Fields for creating an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub period_id: PeriodId,
    pub portion_id: PortionId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Rupiah,
}

/// Partial update for an expense; absent fields stay unchanged
///
/// `portion_id` may reattribute the expense to another portion of the same
/// period.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub portion_id: Option<PortionId>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<Rupiah>,
}

/// Filter criteria for expense listings; all bounds are inclusive
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub portion_id: Option<PortionId>,
}

/// Stateful facade over the store and its storage slot
pub struct StoreService {
    storage: StoreStorage,
    store: Store,
}

impl StoreService {
    /// Open the facade over a storage slot
    ///
    /// Loads (or seeds) the store and reports what happened via
    /// [`LoadOutcome`] so the caller can notify the user about resets.
    pub fn open(storage: StoreStorage) -> DompetResult<(Self, LoadOutcome)> {
        let (store, outcome) = storage.load()?;
        Ok((Self { storage, store }, outcome))
    }

    /// The current in-memory store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The currently active period, if any
    pub fn active_period(&self) -> Option<&Period> {
        self.store.active_period_id.and_then(|id| self.store.period(id))
    }

    fn persist(&mut self) -> DompetResult<()> {
        self.storage.save(&mut self.store)
    }

    // --- Periods ---

    /// Set the active period
    ///
    /// Fails with a not-found error if the period does not exist; a dangling
    /// active-period pointer can never be stored.
    pub fn set_active_period(&mut self, id: PeriodId) -> DompetResult<()> {
        if self.store.period(id).is_none() {
            return Err(DompetError::period_not_found(id.to_string()));
        }
        self.store.active_period_id = Some(id);
        self.persist()
    }

    /// Add a period and make it the active one
    pub fn add_period(&mut self, new: NewPeriod) -> DompetResult<Period> {
        let period = Period::new(new.name, new.start_date, new.end_date, new.income_amount);
        self.store.periods.push(period.clone());
        self.store.active_period_id = Some(period.id);
        self.persist()?;
        debug!(period = %period.id, "period added");
        Ok(period)
    }

    /// Merge fields into a period
    ///
    /// Returns the updated period, or `None` (without persisting) if the
    /// ID does not match anything.
    pub fn update_period(&mut self, id: PeriodId, patch: PeriodPatch) -> DompetResult<Option<Period>> {
        let updated = match self.store.period_mut(id) {
            Some(period) => {
                if let Some(name) = patch.name {
                    period.name = name;
                }
                if let Some(start_date) = patch.start_date {
                    period.start_date = start_date;
                }
                if let Some(end_date) = patch.end_date {
                    period.end_date = end_date;
                }
                if let Some(income_amount) = patch.income_amount {
                    period.income_amount = income_amount;
                }
                period.clone()
            }
            None => return Ok(None),
        };
        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete a period, cascading to its portions and expenses
    ///
    /// If the deleted period was active, the first remaining period (in
    /// insertion order) becomes active, or the pointer is cleared when no
    /// periods remain.
    pub fn delete_period(&mut self, id: PeriodId) -> DompetResult<()> {
        if self.store.period(id).is_none() {
            return Err(DompetError::period_not_found(id.to_string()));
        }

        self.store.periods.retain(|p| p.id != id);
        self.store.portions.retain(|p| p.period_id != id);
        self.store.expenses.retain(|e| e.period_id != id);

        if self.store.active_period_id == Some(id) {
            self.store.active_period_id = self.store.periods.first().map(|p| p.id);
        }

        self.persist()?;
        debug!(period = %id, "period deleted with cascade");
        Ok(())
    }

    // --- Portions ---

    /// Add a portion to an existing period
    pub fn add_portion(&mut self, new: NewPortion) -> DompetResult<Portion> {
        if self.store.period(new.period_id).is_none() {
            return Err(DompetError::period_not_found(new.period_id.to_string()));
        }

        let portion = Portion::new(new.period_id, new.name, new.budget_amount, new.notes);
        self.store.portions.push(portion.clone());
        self.persist()?;
        Ok(portion)
    }

    /// Merge fields into a portion; `None` if the ID does not match
    pub fn update_portion(
        &mut self,
        id: PortionId,
        patch: PortionPatch,
    ) -> DompetResult<Option<Portion>> {
        let updated = match self.store.portion_mut(id) {
            Some(portion) => {
                if let Some(name) = patch.name {
                    portion.name = name;
                }
                if let Some(budget_amount) = patch.budget_amount {
                    portion.budget_amount = budget_amount;
                }
                if let Some(notes) = patch.notes {
                    portion.notes = Some(notes);
                }
                portion.clone()
            }
            None => return Ok(None),
        };
        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete a portion, cascading to the expenses attributed to it
    pub fn delete_portion(&mut self, id: PortionId) -> DompetResult<()> {
        if self.store.portion(id).is_none() {
            return Err(DompetError::portion_not_found(id.to_string()));
        }

        self.store.portions.retain(|p| p.id != id);
        self.store.expenses.retain(|e| e.portion_id != id);

        self.persist()?;
        debug!(portion = %id, "portion deleted with cascade");
        Ok(())
    }

    // --- Expenses ---

    /// Add an expense to an existing period and portion
    ///
    /// The portion must belong to the expense's period.
    pub fn add_expense(&mut self, new: NewExpense) -> DompetResult<Expense> {
        if self.store.period(new.period_id).is_none() {
            return Err(DompetError::period_not_found(new.period_id.to_string()));
        }
        let portion = self
            .store
            .portion(new.portion_id)
            .ok_or_else(|| DompetError::portion_not_found(new.portion_id.to_string()))?;
        if portion.period_id != new.period_id {
            return Err(DompetError::Validation(format!(
                "Portion {} does not belong to period {}",
                new.portion_id, new.period_id
            )));
        }

        let expense = Expense::new(
            new.period_id,
            new.portion_id,
            new.date,
            new.description,
            new.amount,
        );
        self.store.expenses.push(expense.clone());
        self.persist()?;
        Ok(expense)
    }

    /// Merge fields into an expense; `None` if the ID does not match
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> DompetResult<Option<Expense>> {
        let Some(period_id) = self.store.expense(id).map(|e| e.period_id) else {
            return Ok(None);
        };

        if let Some(new_portion_id) = patch.portion_id {
            let portion = self
                .store
                .portion(new_portion_id)
                .ok_or_else(|| DompetError::portion_not_found(new_portion_id.to_string()))?;
            if portion.period_id != period_id {
                return Err(DompetError::Validation(format!(
                    "Portion {} does not belong to period {}",
                    new_portion_id, period_id
                )));
            }
        }

        let updated = match self.store.expense_mut(id) {
            Some(expense) => {
                if let Some(portion_id) = patch.portion_id {
                    expense.portion_id = portion_id;
                }
                if let Some(date) = patch.date {
                    expense.date = date;
                }
                if let Some(description) = patch.description {
                    expense.description = description;
                }
                if let Some(amount) = patch.amount {
                    expense.amount = amount;
                }
                expense.clone()
            }
            None => return Ok(None),
        };
        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete an expense (leaf entity, no cascade)
    pub fn delete_expense(&mut self, id: ExpenseId) -> DompetResult<()> {
        if self.store.expense(id).is_none() {
            return Err(DompetError::expense_not_found(id.to_string()));
        }
        self.store.expenses.retain(|e| e.id != id);
        self.persist()
    }

    /// List a period's expenses, filtered and sorted most recent first
    ///
    /// Date bounds are inclusive. The sort is stable, so expenses sharing a
    /// date keep their relative insertion order.
    pub fn filtered_expenses(&self, period_id: PeriodId, filter: ExpenseFilter) -> Vec<Expense> {
        let mut rows: Vec<Expense> = self
            .store
            .expenses
            .iter()
            .filter(|e| e.period_id == period_id)
            .filter(|e| filter.start_date.map_or(true, |start| e.date >= start))
            .filter(|e| filter.end_date.map_or(true, |end| e.date <= end))
            .filter(|e| filter.portion_id.map_or(true, |p| e.portion_id == p))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    // --- Summaries ---

    /// Aggregate budget-vs-actual figures for a period
    pub fn period_summary(&self, period_id: PeriodId) -> DompetResult<PeriodSummary> {
        let period = self
            .store
            .period(period_id)
            .ok_or_else(|| DompetError::period_not_found(period_id.to_string()))?;
        Ok(summary::period_summary(
            period,
            &self.store.portions,
            &self.store.expenses,
        ))
    }

    /// Per-portion summaries for a period, in insertion order
    pub fn portion_summaries(&self, period_id: PeriodId) -> Vec<PortionSummary> {
        summary::portion_summaries_for_period(period_id, &self.store.portions, &self.store.expenses)
    }

    // --- Whole-store operations ---

    /// Export the store as pretty-printed JSON
    pub fn export_data(&self) -> DompetResult<String> {
        storage::export_as_text(&self.store)
    }

    /// Replace the store with a validated import and persist it
    ///
    /// On any failure the current store, in memory and on disk, is left
    /// untouched.
    pub fn import_data(&mut self, text: &str) -> DompetResult<()> {
        let imported = storage::import_from_text(text)?;
        self.store = imported;
        self.persist()
    }

    /// Replace the store with a fresh empty one and persist it
    pub fn clear_data(&mut self) -> DompetResult<()> {
        self.storage.clear()?;
        self.store = Store::empty(Utc::now());
        self.persist()
    }

    /// Replace the store with regenerated sample data and persist it
    pub fn reset_data(&mut self) -> DompetResult<()> {
        self.store = seed::sample_store(Utc::now());
        self.persist()
    }
}
