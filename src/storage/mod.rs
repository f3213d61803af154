//! Storage layer for the ledger
//!
//! Provides the append-only CSV transaction store and the file helpers it is
//! built on.

pub mod file_io;
pub mod transactions;

pub use transactions::{TransactionStore, COLUMNS};
