//! Path management for dompet-core
//!
//! Resolves the directory holding the single store slot.
//!
//! ## Path Resolution Order
//!
//! 1. `DOMPET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/dompet` or `~/.local/share/dompet`
//! 3. Windows: `%APPDATA%\dompet`

use std::path::PathBuf;

use crate::error::DompetError;

/// Manages all paths used by dompet-core
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Base directory for all persisted data
    base_dir: PathBuf,
}

impl StorePaths {
    /// Create a new StorePaths instance
    ///
    /// Path resolution:
    /// 1. `DOMPET_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/dompet` or `~/.local/share/dompet`
    /// 3. Windows: `%APPDATA%\dompet`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DompetError> {
        let base_dir = if let Ok(custom) = std::env::var("DOMPET_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the single store slot
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DompetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DompetError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DompetError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| DompetError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    Ok(data_base.join("dompet"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DompetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DompetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("dompet"))
}
