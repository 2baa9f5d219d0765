//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the store slot on
//! failure: a write either lands completely or leaves the previous
//! contents intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::DompetError;

/// Read a file to a string, returning `None` if it doesn't exist
pub fn read_to_string_opt(path: &Path) -> Result<Option<String>, DompetError> {
    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| DompetError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
pub fn write_text_atomic(path: &Path, contents: &str) -> Result<(), DompetError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DompetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| DompetError::Storage(format!("Failed to create temp file: {}", e)))?;

    file.write_all(contents.as_bytes())
        .map_err(|e| DompetError::Storage(format!("Failed to write data: {}", e)))?;

    file.flush()
        .map_err(|e| DompetError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| DompetError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        DompetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Remove a file, succeeding if it doesn't exist
pub fn remove_file_if_exists(path: &Path) -> Result<(), DompetError> {
    if !path.exists() {
        return Ok(());
    }

    fs::remove_file(path)
        .map_err(|e| DompetError::Storage(format!("Failed to remove {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(read_to_string_opt(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        write_text_atomic(&path, "{\"a\": 1}").unwrap();
        assert!(path.exists());

        let contents = read_to_string_opt(&path).unwrap().unwrap();
        assert_eq!(contents, "{\"a\": 1}");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let temp_path = temp_dir.path().join("store.json.tmp");

        write_text_atomic(&path, "data").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("store.json");

        write_text_atomic(&path, "data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_remove_file_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        // Removing a missing file is fine
        remove_file_if_exists(&path).unwrap();

        write_text_atomic(&path, "data").unwrap();
        remove_file_if_exists(&path).unwrap();
        assert!(!path.exists());
    }
}
