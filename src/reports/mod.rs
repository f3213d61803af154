//! Reports module for the ledger
//!
//! Provides the date range report: matching transactions plus income, expense
//! and net totals.

pub mod range;

pub use range::{query, RangeReport, RangeSummary};
