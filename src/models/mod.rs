//! Core data models for dompet-core
//!
//! This module contains all the data structures that represent the budgeting
//! domain: periods, portions, expenses, and the root store aggregate.

pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod portion;
pub mod store;

pub use expense::Expense;
pub use ids::{ExpenseId, PeriodId, PortionId};
pub use money::Rupiah;
pub use period::Period;
pub use portion::Portion;
pub use store::{Store, STORE_VERSION};
