//! First-run sample data
//!
//! A fresh installation gets one period covering the current calendar month,
//! a handful of everyday portions, and a few expenses, so the app renders
//! something meaningful before the user enters their own data.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Expense, Period, Portion, Rupiah, Store};

/// Income on the seeded period
pub const SAMPLE_INCOME: Rupiah = Rupiah::new(5_000_000);

/// Build the sample store for a fresh installation
///
/// The seeded period spans the calendar month containing `now` and is set
/// as the active period.
pub fn sample_store(now: DateTime<Utc>) -> Store {
    let mut store = Store::empty(now);

    let period = Period::month_of(now.date_naive(), SAMPLE_INCOME);
    let start = period.start_date;

    let portions = vec![
        Portion::new(period.id, "Makanan", Rupiah::new(1_500_000), None),
        Portion::new(period.id, "Transportasi", Rupiah::new(500_000), None),
        Portion::new(period.id, "Belanja", Rupiah::new(750_000), None),
        Portion::new(period.id, "Hiburan", Rupiah::new(400_000), None),
        Portion::new(
            period.id,
            "Tabungan",
            Rupiah::new(1_000_000),
            Some("Dana darurat".into()),
        ),
    ];

    let expenses = vec![
        Expense::new(
            period.id,
            portions[0].id,
            start + Duration::days(1),
            "Belanja mingguan",
            Rupiah::new(350_000),
        ),
        Expense::new(
            period.id,
            portions[1].id,
            start + Duration::days(2),
            "Bensin",
            Rupiah::new(100_000),
        ),
        Expense::new(
            period.id,
            portions[0].id,
            start + Duration::days(3),
            "Makan siang",
            Rupiah::new(45_000),
        ),
    ];

    store.active_period_id = Some(period.id);
    store.periods.push(period);
    store.portions = portions;
    store.expenses = expenses;
    store
}
