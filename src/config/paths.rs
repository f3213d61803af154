//! Path management for the ledger
//!
//! The store lives at a fixed file name in the working directory unless a path
//! is injected explicitly (the `--file` flag, or a temporary path in tests).

use std::path::{Path, PathBuf};

/// File name of the default transaction store
pub const DEFAULT_STORE_FILE: &str = "finance_data.csv";

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    store_file: PathBuf,
}

impl LedgerPaths {
    /// Paths rooted at the working directory with the default store file name
    pub fn new() -> Self {
        Self {
            store_file: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }

    /// Use an explicit store file (useful for testing)
    pub fn with_store_file(store_file: impl Into<PathBuf>) -> Self {
        Self {
            store_file: store_file.into(),
        }
    }

    /// Resolve from an optional override, falling back to the default
    pub fn resolve(store_file: Option<PathBuf>) -> Self {
        store_file.map(Self::with_store_file).unwrap_or_default()
    }

    /// Get the path to the CSV store
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}
