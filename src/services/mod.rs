//! Business logic layer for dompet-core
//!
//! A single stateful facade composes the models, storage, and summary
//! modules into the operation set the presentation layer calls.

pub mod store;

pub use store::{
    ExpenseFilter, ExpensePatch, NewExpense, NewPeriod, NewPortion, PeriodPatch, PortionPatch,
    StoreService,
};
