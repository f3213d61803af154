//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and reports for terminal
//! display.

pub mod report;
pub mod transaction;

pub use report::{separator, REPORT_WIDTH};
pub use transaction::{format_transaction_row, format_transaction_table};
