//! Transaction model
//!
//! A single income or expense entry. Transactions are built once, appended to
//! the store and only ever read afterwards.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Canonical textual date format (`DD-MM-YYYY`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `DD-MM-YYYY` date
///
/// Day and month may drop their leading zero; the year must be exactly four
/// digits so the date reads back in the same form it is written.
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    let invalid = || LedgerError::Validation(format!("Invalid date '{}'. Use dd-mm-yyyy", s));

    let year = s.rsplit('-').next().unwrap_or_default();
    if s.split('-').count() != 3 || year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Render a date in the canonical `DD-MM-YYYY` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Amount, never negative
    pub amount: Money,

    pub category: Category,

    /// Free-form notes, possibly empty
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    pub fn is_expense(&self) -> bool {
        self.category == Category::Expense
    }

    /// Validate field values before they reach the store
    ///
    /// Zero amounts are allowed.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.amount.is_negative() {
            return Err(LedgerError::Validation(
                "Amount must be a non-negative value".into(),
            ));
        }
        if self.description.contains(|c: char| c == '\n' || c == '\r') {
            return Err(LedgerError::Validation(
                "Description cannot span multiple lines".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_date(self.date),
            self.amount,
            self.category,
            self.description
        )
    }
}
