//! Finance Ledger - command-line personal finance ledger
//!
//! Records income and expense transactions in an append-only CSV file and
//! reports on any date range: the matching transactions, total income, total
//! expense and net savings, optionally plotted in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Store path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money)
//! - `storage`: Append-only CSV transaction store
//! - `reports`: Date range query and summary
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu, prompts and non-interactive commands
//! - `tui`: Terminal chart
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_ledger::config::LedgerPaths;
//! use finance_ledger::models::parse_date;
//! use finance_ledger::reports::RangeReport;
//! use finance_ledger::storage::TransactionStore;
//!
//! # fn main() -> Result<(), finance_ledger::LedgerError> {
//! let store = TransactionStore::from_paths(&LedgerPaths::new());
//! let report = RangeReport::generate(
//!     &store,
//!     parse_date("01-01-2024")?,
//!     parse_date("31-01-2024")?,
//! )?;
//! print!("{}", report.format_terminal());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
