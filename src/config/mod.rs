//! Configuration module for the ledger
//!
//! The ledger has no settings file and reads no environment variables; the only
//! configurable value is the location of the transaction store.

pub mod paths;

pub use paths::{LedgerPaths, DEFAULT_STORE_FILE};
