//! Persistence layer for dompet-core
//!
//! The whole store lives in one JSON document under a single storage slot.
//! This module owns the slot: loading (with first-run seeding and the
//! one-year retention policy), saving, clearing, and text export/import.

pub mod file_io;
pub mod seed;

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::config::StorePaths;
use crate::error::{DompetError, DompetResult};
use crate::models::Store;

/// A store older than this is discarded on load
const RETENTION_DAYS: i64 = 365;

/// Why a persisted store was discarded on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// The slot held data that could not be parsed as a store
    Corrupt,
    /// The store outlived the retention window
    Expired,
}

/// What [`StoreStorage::load`] found in the slot
///
/// Both reset paths carry the same structural signal; whether and how to
/// surface them to the user is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing store was loaded as-is
    Existing,
    /// The slot was empty; sample data was generated and persisted
    Seeded,
    /// The persisted store was discarded and replaced
    Reset(ResetReason),
}

impl LoadOutcome {
    /// Whether the user's data was cleared by the retention policy
    pub fn was_cleared(&self) -> bool {
        matches!(self, Self::Reset(ResetReason::Expired))
    }

    /// Whether previously persisted data was discarded for any reason
    pub fn was_reset(&self) -> bool {
        matches!(self, Self::Reset(_))
    }
}

/// Persistence service for the single store slot
///
/// Synchronous and single-owner: no locking, no background work. The facade
/// reads the slot once at startup and writes it after every mutation.
pub struct StoreStorage {
    slot: PathBuf,
}

impl StoreStorage {
    /// Create a storage service over the slot described by `paths`
    pub fn new(paths: &StorePaths) -> DompetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            slot: paths.store_file(),
        })
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> &Path {
        &self.slot
    }

    /// Load the store from the slot
    ///
    /// - Empty slot: seed data is generated, persisted, and returned.
    /// - Unparsable or structurally invalid contents: treated as corrupt;
    ///   seed data replaces it.
    /// - Store older than the retention window: replaced with an empty store.
    /// - Otherwise: returned with `last_used_at` refreshed and persisted.
    pub fn load(&self) -> DompetResult<(Store, LoadOutcome)> {
        let Some(text) = file_io::read_to_string_opt(&self.slot)? else {
            info!(slot = %self.slot.display(), "no store found, seeding sample data");
            let mut store = seed::sample_store(Utc::now());
            self.save(&mut store)?;
            return Ok((store, LoadOutcome::Seeded));
        };

        match serde_json::from_str::<Store>(&text) {
            Ok(mut store) => {
                let age = Utc::now() - store.created_at;
                if age > Duration::days(RETENTION_DAYS) {
                    warn!(
                        days = age.num_days(),
                        "store exceeded the retention window, starting over empty"
                    );
                    let mut fresh = Store::empty(Utc::now());
                    self.save(&mut fresh)?;
                    Ok((fresh, LoadOutcome::Reset(ResetReason::Expired)))
                } else {
                    self.save(&mut store)?;
                    debug!(periods = store.periods.len(), "store loaded");
                    Ok((store, LoadOutcome::Existing))
                }
            }
            Err(err) => {
                warn!(%err, "stored data is corrupt, replacing with sample data");
                let mut store = seed::sample_store(Utc::now());
                self.save(&mut store)?;
                Ok((store, LoadOutcome::Reset(ResetReason::Corrupt)))
            }
        }
    }

    /// Persist the store to the slot
    ///
    /// Stamps `last_used_at` before writing. Write failures (disk full,
    /// permissions) surface as [`DompetError::Storage`]; the previous slot
    /// contents survive a failed write.
    pub fn save(&self, store: &mut Store) -> DompetResult<()> {
        store.last_used_at = Utc::now();
        let json = serde_json::to_string_pretty(store)
            .map_err(|e| DompetError::Json(e.to_string()))?;
        file_io::write_text_atomic(&self.slot, &json)?;
        debug!(slot = %self.slot.display(), "store saved");
        Ok(())
    }

    /// Remove the slot entirely
    ///
    /// No reseeding happens here; the caller decides whether to start empty
    /// or regenerate sample data.
    pub fn clear(&self) -> DompetResult<()> {
        file_io::remove_file_if_exists(&self.slot)
    }
}

/// Serialize a store as pretty-printed JSON, suitable for re-import
pub fn export_as_text(store: &Store) -> DompetResult<String> {
    serde_json::to_string_pretty(store).map_err(|e| DompetError::Json(e.to_string()))
}

/// Parse and validate an exported store
///
/// Fails if the payload is not valid JSON, is missing required fields, or
/// contains dangling references. On success `last_used_at` is refreshed;
/// nothing is written to storage (the caller persists the result).
pub fn import_from_text(text: &str) -> DompetResult<Store> {
    let mut store: Store = serde_json::from_str(text)
        .map_err(|e| DompetError::Import(format!("Not a valid store document: {}", e)))?;

    store.validate().map_err(DompetError::Import)?;

    store.last_used_at = Utc::now();
    Ok(store)
}

/// Conventional file name for an export made on `date`
/// (e.g. `dompet-export-2026-08-27.json`)
pub fn export_file_name(date: NaiveDate) -> String {
    format!("dompet-export-{}.json", date.format("%Y-%m-%d"))
}
