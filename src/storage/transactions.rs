//! Transaction store backed by a CSV file
//!
//! Rows are appended in the fixed column order `date,amount,category,description`
//! and never rewritten. Loading reads the whole file back in file order.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{format_date, parse_date, Category, Money, Transaction};

use super::file_io::{ensure_parent_dir, open_append, open_required};

/// Header row, in storage column order
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// One CSV row as text
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRow {
    date: String,
    amount: String,
    category: String,
    description: String,
}

impl StoredRow {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: format_date(txn.date),
            amount: txn.amount.to_decimal_string(),
            category: txn.category.label().to_string(),
            description: txn.description.clone(),
        }
    }

    fn into_transaction(self, line: u64) -> LedgerResult<Transaction> {
        let date = parse_date(&self.date)
            .map_err(|_| LedgerError::malformed_row(line, format!("invalid date '{}'", self.date)))?;

        let amount = Money::parse(&self.amount).map_err(|e| {
            LedgerError::malformed_row(line, format!("invalid amount '{}': {}", self.amount, e))
        })?;

        let category: Category = self
            .category
            .parse()
            .map_err(|_| LedgerError::malformed_row(line, format!("unknown category '{}'", self.category)))?;

        Ok(Transaction::new(date, amount, category, self.description))
    }
}

/// Append-only store of transactions in a single CSV file
///
/// The store assumes a single process uses the file at a time; concurrent
/// writers are not coordinated.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store handle for the given file (nothing is touched on disk)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store handle from resolved paths
    pub fn from_paths(paths: &LedgerPaths) -> Self {
        Self::new(paths.store_file())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Make sure the backing file exists
    ///
    /// A missing file is created holding only the header row. An existing file
    /// is left untouched. Returns `true` when the file was created.
    pub fn initialize(&self) -> LedgerResult<bool> {
        if self.exists() {
            tracing::debug!(path = %self.path.display(), "Transaction store already present");
            return Ok(false);
        }

        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path).map_err(|e| {
            LedgerError::Io(format!("Failed to create {}: {}", self.path.display(), e))
        })?;

        let mut writer = csv_writer(file);
        writer.write_record(COLUMNS)?;
        writer.flush()?;

        tracing::info!(path = %self.path.display(), "Created transaction store");
        Ok(true)
    }

    /// Append one transaction as a new row
    ///
    /// Field values are written as given; validation belongs to the caller.
    /// The store must already exist (see [`TransactionStore::initialize`]).
    pub fn append(&self, txn: &Transaction) -> LedgerResult<()> {
        let file = open_append(&self.path)?;

        let mut writer = csv_writer(file);
        writer.serialize(StoredRow::from_transaction(txn))?;
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), transaction = %txn, "Appended transaction");
        Ok(())
    }

    /// Read every transaction, in file order
    ///
    /// Any row that cannot be parsed aborts the whole load.
    pub fn load_all(&self) -> LedgerResult<Vec<Transaction>> {
        let file = open_required(&self.path)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));
        let headers = reader.headers()?.clone();

        let mut transactions = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row: StoredRow = record
                .deserialize(Some(&headers))
                .map_err(|e| LedgerError::malformed_row(line, e.to_string()))?;
            transactions.push(row.into_transaction(line)?);
        }

        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transactions"
        );
        Ok(transactions)
    }
}

fn csv_writer(file: File) -> csv::Writer<BufWriter<File>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file))
}
