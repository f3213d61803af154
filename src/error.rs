//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reader/writer errors not tied to a specific row
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid user input (date, amount, category)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store file does not exist yet
    #[error("Transaction store not found at {}; add a transaction first", path.display())]
    StoreMissing { path: PathBuf },

    /// A stored row could not be turned back into a transaction
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// A total over the selected transactions does not fit in an amount
    #[error("Totals are too large to compute: {0}")]
    Overflow(String),

    /// Input stream ended while a value was still being requested
    #[error("Input closed before a value was entered")]
    InputClosed,

    /// Chart/terminal errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create a malformed-row error
    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the store was missing
    pub fn is_store_missing(&self) -> bool {
        matches!(self, Self::StoreMissing { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => Self::malformed_row(pos.line(), err.to_string()),
            None => Self::Csv(err.to_string()),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
