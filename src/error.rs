//! Custom error types for dompet-core
//!
//! This module defines the error hierarchy for the data layer using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dompet-core operations
#[derive(Error, Debug)]
pub enum DompetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors (unparsable or structurally invalid payloads)
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors (write rejected, slot unreadable)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DompetError {
    /// Create a "not found" error for periods
    pub fn period_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Period",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for portions
    pub fn portion_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Portion",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DompetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DompetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dompet-core operations
pub type DompetResult<T> = Result<T, DompetError>;
