//! Pure budget-vs-actual derivations
//!
//! Summaries are never persisted; they are recomputed on demand from the raw
//! entities. Everything here is deterministic and side-effect free, so the
//! facade can call it on every render.

use crate::models::{Expense, Period, PeriodId, Portion, Rupiah};

/// Budget-vs-actual figures for one portion
#[derive(Debug, Clone, PartialEq)]
pub struct PortionSummary {
    /// The portion being summarized
    pub portion: Portion,

    /// Amount budgeted
    pub budget: Rupiah,

    /// Sum of expenses attributed to this portion
    pub used: Rupiah,

    /// `budget - used` (negative when over budget)
    pub remaining: Rupiah,

    /// `used / budget * 100`, or 0 when the budget is 0
    pub percent_used: f64,

    /// Whether spending exceeds the budget
    pub is_over_budget: bool,
}

/// Aggregate budget-vs-actual figures for one period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    /// The period being summarized
    pub period: Period,

    /// The period's income
    pub total_income: Rupiah,

    /// Sum of portion budgets in the period
    pub total_budgeted: Rupiah,

    /// Sum of all expenses in the period, regardless of portion
    pub total_expenses: Rupiah,

    /// `total_budgeted - total_expenses`
    pub remaining_budget: Rupiah,

    /// `total_income - total_expenses`
    pub remaining_income: Rupiah,

    /// `total_income - total_budgeted` (income not allocated to any portion)
    pub unallocated_income: Rupiah,

    /// `total_expenses / total_budgeted * 100`, or 0 when nothing is budgeted
    pub overall_percent_used: f64,

    /// Whether spending exceeds the total budget
    pub is_over_budget: bool,
}

/// Percentage of `budget` consumed by `used`, guarding division by zero
fn percent_used(used: Rupiah, budget: Rupiah) -> f64 {
    if budget.is_zero() {
        0.0
    } else {
        used.amount() as f64 / budget.amount() as f64 * 100.0
    }
}

/// Summarize one portion against the expenses of its period
///
/// `expenses_in_period` may contain expenses for sibling portions; only
/// those attributed to this portion are counted.
pub fn portion_summary(portion: &Portion, expenses_in_period: &[Expense]) -> PortionSummary {
    let used: Rupiah = expenses_in_period
        .iter()
        .filter(|e| e.portion_id == portion.id)
        .map(|e| e.amount)
        .sum();

    let budget = portion.budget_amount;

    PortionSummary {
        portion: portion.clone(),
        budget,
        used,
        remaining: budget - used,
        percent_used: percent_used(used, budget),
        is_over_budget: used > budget,
    }
}

/// Summarize a period against all portions and expenses in the store
///
/// Portions and expenses belonging to other periods are ignored.
pub fn period_summary(
    period: &Period,
    all_portions: &[Portion],
    all_expenses: &[Expense],
) -> PeriodSummary {
    let total_budgeted: Rupiah = all_portions
        .iter()
        .filter(|p| p.period_id == period.id)
        .map(|p| p.budget_amount)
        .sum();

    let total_expenses: Rupiah = all_expenses
        .iter()
        .filter(|e| e.period_id == period.id)
        .map(|e| e.amount)
        .sum();

    let total_income = period.income_amount;

    PeriodSummary {
        period: period.clone(),
        total_income,
        total_budgeted,
        total_expenses,
        remaining_budget: total_budgeted - total_expenses,
        remaining_income: total_income - total_expenses,
        unallocated_income: total_income - total_budgeted,
        overall_percent_used: percent_used(total_expenses, total_budgeted),
        is_over_budget: total_expenses > total_budgeted,
    }
}

/// Summarize every portion of a period, in the store's insertion order
pub fn portion_summaries_for_period(
    period_id: PeriodId,
    all_portions: &[Portion],
    all_expenses: &[Expense],
) -> Vec<PortionSummary> {
    let expenses_in_period: Vec<Expense> = all_expenses
        .iter()
        .filter(|e| e.period_id == period_id)
        .cloned()
        .collect();

    all_portions
        .iter()
        .filter(|p| p.period_id == period_id)
        .map(|p| portion_summary(p, &expenses_in_period))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    fn november() -> Period {
        Period::month_of(date(1), Rupiah::new(10_000_000))
    }

    fn expense(period: &Period, portion: &Portion, day: u32, amount: i64) -> Expense {
        Expense::new(period.id, portion.id, date(day), "test", Rupiah::new(amount))
    }

    #[test]
    fn test_portion_summary_basic() {
        let period = november();
        let portion = Portion::new(period.id, "Makanan", Rupiah::new(3_000_000), None);
        let expenses = vec![
            expense(&period, &portion, 5, 50_000),
            expense(&period, &portion, 8, 150_000),
        ];

        let summary = portion_summary(&portion, &expenses);

        assert_eq!(summary.budget.amount(), 3_000_000);
        assert_eq!(summary.used.amount(), 200_000);
        assert_eq!(summary.remaining.amount(), 2_800_000);
        assert!(!summary.is_over_budget);
        assert!((summary.percent_used - 200_000.0 / 3_000_000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_portion_summary_ignores_sibling_portions() {
        let period = november();
        let makanan = Portion::new(period.id, "Makanan", Rupiah::new(3_000_000), None);
        let hiburan = Portion::new(period.id, "Hiburan", Rupiah::new(400_000), None);
        let expenses = vec![
            expense(&period, &makanan, 5, 50_000),
            expense(&period, &hiburan, 6, 75_000),
        ];

        let summary = portion_summary(&makanan, &expenses);
        assert_eq!(summary.used.amount(), 50_000);
    }

    #[test]
    fn test_portion_summary_over_budget() {
        let period = november();
        let portion = Portion::new(period.id, "Hiburan", Rupiah::new(100_000), None);
        let expenses = vec![expense(&period, &portion, 10, 150_000)];

        let summary = portion_summary(&portion, &expenses);

        assert!(summary.is_over_budget);
        assert_eq!(summary.remaining.amount(), -50_000);
        assert!((summary.percent_used - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_portion_summary_zero_budget() {
        let period = november();
        let portion = Portion::new(period.id, "Lainnya", Rupiah::zero(), None);
        let expenses = vec![expense(&period, &portion, 10, 25_000)];

        let summary = portion_summary(&portion, &expenses);

        // Division-by-zero guard: exactly 0, not NaN or infinity
        assert_eq!(summary.percent_used, 0.0);
        assert!(summary.is_over_budget);
    }

    #[test]
    fn test_period_summary_scenario() {
        // Fresh period with income 10.000.000, one portion budgeted
        // 3.000.000, one expense of 50.000
        let period = november();
        let portion = Portion::new(period.id, "Makanan", Rupiah::new(3_000_000), None);
        let expenses = vec![expense(&period, &portion, 5, 50_000)];
        let portions = vec![portion];

        let summary = period_summary(&period, &portions, &expenses);

        assert_eq!(summary.total_income.amount(), 10_000_000);
        assert_eq!(summary.total_budgeted.amount(), 3_000_000);
        assert_eq!(summary.total_expenses.amount(), 50_000);
        assert_eq!(summary.unallocated_income.amount(), 7_000_000);
        assert_eq!(summary.remaining_budget.amount(), 2_950_000);
        assert_eq!(summary.remaining_income.amount(), 9_950_000);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_period_summary_counts_expenses_without_matching_portion_filter() {
        // total_expenses counts every expense with the period's ID,
        // regardless of which portion it points at
        let period = november();
        let other_period = Period::month_of(
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            Rupiah::new(8_000_000),
        );
        let makanan = Portion::new(period.id, "Makanan", Rupiah::new(3_000_000), None);
        let december_portion =
            Portion::new(other_period.id, "Makanan", Rupiah::new(2_000_000), None);

        let portions = vec![makanan.clone(), december_portion.clone()];
        let expenses = vec![
            expense(&period, &makanan, 5, 50_000),
            expense(&other_period, &december_portion, 2, 999_999),
        ];

        let summary = period_summary(&period, &portions, &expenses);

        assert_eq!(summary.total_budgeted.amount(), 3_000_000);
        assert_eq!(summary.total_expenses.amount(), 50_000);
    }

    #[test]
    fn test_period_summary_zero_budget() {
        let period = november();
        let summary = period_summary(&period, &[], &[]);

        assert_eq!(summary.overall_percent_used, 0.0);
        assert_eq!(summary.total_budgeted.amount(), 0);
        assert_eq!(summary.unallocated_income.amount(), 10_000_000);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_portion_summaries_preserve_insertion_order() {
        let period = november();
        let names = ["Makanan", "Transportasi", "Belanja"];
        let portions: Vec<Portion> = names
            .iter()
            .map(|n| Portion::new(period.id, *n, Rupiah::new(100_000), None))
            .collect();

        let summaries = portion_summaries_for_period(period.id, &portions, &[]);

        let got: Vec<&str> = summaries.iter().map(|s| s.portion.name.as_str()).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn test_portion_summaries_scope_to_period() {
        let period = november();
        let other = Period::month_of(
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            Rupiah::new(8_000_000),
        );
        let portions = vec![
            Portion::new(period.id, "Makanan", Rupiah::new(100_000), None),
            Portion::new(other.id, "Makanan", Rupiah::new(200_000), None),
        ];

        let summaries = portion_summaries_for_period(period.id, &portions, &[]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].budget.amount(), 100_000);
    }
}
