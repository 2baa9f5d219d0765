//! dompet-core - data layer for a single-user Rupiah budgeting app
//!
//! This library implements the storage and derivation core of an
//! offline-first budgeting application: budgeting periods with an income
//! figure, per-category allocations ("portions"), and individual expense
//! records, all persisted as a single JSON document.
//!
//! The presentation layer (dialogs, tabs, rendering) is an external
//! collaborator: it calls the facade operations and renders the results,
//! and never touches storage or computes summaries itself.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (periods, portions, expenses, the store)
//! - `format`: Display formatting helpers
//! - `storage`: JSON persistence, first-run seeding, and retention
//! - `summary`: Pure budget-vs-actual derivations
//! - `services`: The stateful data-access facade
//!
//! # Example
//!
//! ```rust,ignore
//! use dompet_core::config::StorePaths;
//! use dompet_core::services::StoreService;
//! use dompet_core::storage::StoreStorage;
//!
//! let storage = StoreStorage::new(&StorePaths::new()?)?;
//! let (mut service, outcome) = StoreService::open(storage)?;
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;
pub mod summary;

pub use error::{DompetError, DompetResult};
