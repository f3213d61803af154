//! Transaction display formatting
//!
//! Renders transactions as a fixed-width table for the terminal.

use crate::models::{format_date, Transaction};

use super::report::{left_align, right_align};

const DATE_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 8;

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{}  {}  {}  {}",
        left_align(&format_date(txn.date), DATE_WIDTH),
        right_align(&txn.amount.to_string(), AMOUNT_WIDTH),
        left_align(txn.category.label(), CATEGORY_WIDTH),
        txn.description
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a table with a header row
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    let mut output = String::new();
    let header = format!(
        "{}  {}  {}  {}",
        left_align("Date", DATE_WIDTH),
        right_align("Amount", AMOUNT_WIDTH),
        left_align("Category", CATEGORY_WIDTH),
        "Description"
    );
    output.push_str(&header);
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}
