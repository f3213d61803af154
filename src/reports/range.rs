//! Date range report
//!
//! Selects the transactions dated within an inclusive interval and totals
//! income and expense over them.

use chrono::NaiveDate;

use crate::display::{format_transaction_table, separator, REPORT_WIDTH};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{format_date, Money, Transaction};
use crate::storage::TransactionStore;

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense
    pub net: Money,
}

impl RangeSummary {
    /// Sum amounts per category
    ///
    /// Fails instead of wrapping when a total leaves the amount range.
    pub fn from_transactions(transactions: &[Transaction]) -> LedgerResult<Self> {
        let overflow = |what: &str| LedgerError::Overflow(what.to_string());

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        for txn in transactions {
            if txn.is_income() {
                total_income = total_income
                    .checked_add(txn.amount)
                    .ok_or_else(|| overflow("total income"))?;
            } else if txn.is_expense() {
                total_expense = total_expense
                    .checked_add(txn.amount)
                    .ok_or_else(|| overflow("total expense"))?;
            }
        }

        let net = total_income
            .checked_sub(total_expense)
            .ok_or_else(|| overflow("net savings"))?;

        Ok(Self {
            total_income,
            total_expense,
            net,
        })
    }
}

/// Transactions within a date range and their totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Matches, in store order
    pub transactions: Vec<Transaction>,
    pub summary: RangeSummary,
}

/// Filter `transactions` to `start_date <= date <= end_date` and total them
///
/// A reversed range simply matches nothing.
pub fn query(
    transactions: &[Transaction],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> LedgerResult<RangeReport> {
    let matches: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start_date && t.date <= end_date)
        .cloned()
        .collect();

    let summary = RangeSummary::from_transactions(&matches)?;

    tracing::debug!(
        start = %format_date(start_date),
        end = %format_date(end_date),
        scanned = transactions.len(),
        matched = matches.len(),
        "Range query"
    );

    Ok(RangeReport {
        start_date,
        end_date,
        transactions: matches,
        summary,
    })
}

impl RangeReport {
    /// Load the store and run the query over it
    pub fn generate(
        store: &TransactionStore,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> LedgerResult<Self> {
        let transactions = store.load_all()?;
        query(&transactions, start_date, end_date)
    }

    /// No transaction fell in the range
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No transactions found in the given date range.\n".to_string();
        }

        let line = separator(REPORT_WIDTH);
        let mut output = String::new();

        output.push_str(&format!(
            "Transactions from {} to {}\n",
            format_date(self.start_date),
            format_date(self.end_date)
        ));
        output.push_str(&line);
        output.push('\n');
        output.push_str(&format_transaction_table(&self.transactions));
        output.push_str(&line);
        output.push_str("\n\n");

        output.push_str("Summary:\n");
        output.push_str(&format!("Total Income: {}\n", self.summary.total_income));
        output.push_str(&format!("Total Expense: {}\n", self.summary.total_expense));
        output.push_str(&format!("Net Savings: {}\n", self.summary.net));
        output.push_str(&line);
        output.push('\n');

        output
    }
}
