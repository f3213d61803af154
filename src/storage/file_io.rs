//! File I/O helpers for the CSV store
//!
//! Thin wrappers over `std::fs` that translate failures into ledger errors
//! carrying the offending path.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Open an existing file for reading; a missing file is a `StoreMissing` error
pub fn open_required(path: &Path) -> LedgerResult<File> {
    File::open(path).map_err(|e| missing_or_io(path, e, "open"))
}

/// Open an existing file for appending without creating it
pub fn open_append(path: &Path) -> LedgerResult<File> {
    OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| missing_or_io(path, e, "open for append"))
}

fn missing_or_io(path: &Path, err: std::io::Error, action: &str) -> LedgerError {
    if err.kind() == ErrorKind::NotFound {
        LedgerError::StoreMissing {
            path: path.to_path_buf(),
        }
    } else {
        LedgerError::Io(format!("Failed to {} {}: {}", action, path.display(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_required_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let err = open_required(&path).unwrap_err();
        assert!(err.is_store_missing());
    }

    #[test]
    fn test_open_append_does_not_create() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(open_append(&path).unwrap_err().is_store_missing());
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("data.csv");

        ensure_parent_dir(&path).unwrap();
        assert!(temp_dir.path().join("nested").join("dir").exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("finance_data.csv")).unwrap();
    }
}
