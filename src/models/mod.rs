//! Core data models for the ledger
//!
//! This module contains the data structures that represent the ledger domain:
//! transactions, their categories and money amounts.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{Category, CATEGORY_CODES};
pub use money::{Money, MoneyParseError, MAX_CENTS};
pub use transaction::{format_date, parse_date, Transaction, DATE_FORMAT};
