//! Non-interactive transaction commands
//!
//! `add` and `report` take every field as an argument, which makes the ledger
//! scriptable without going through the menu.

use std::io::Write;

use chrono::Local;
use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Category, Money, Transaction};
use crate::reports::RangeReport;
use crate::storage::TransactionStore;
use crate::tui::ChartRenderer;

/// Arguments for `add`
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Amount (non-negative, e.g. "42.50")
    #[arg(short, long)]
    pub amount: String,

    /// Category: I/E or Income/Expense
    #[arg(short, long)]
    pub category: String,

    /// Transaction date (dd-mm-yyyy), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Arguments for `report`
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Start date (dd-mm-yyyy), inclusive
    pub from: String,

    /// End date (dd-mm-yyyy), inclusive
    pub to: String,

    /// Show the income/expense chart after the summary
    #[arg(long)]
    pub chart: bool,
}

impl AddArgs {
    /// Validate the arguments into a transaction
    pub fn to_transaction(&self) -> LedgerResult<Transaction> {
        let date = match &self.date {
            Some(date) => parse_date(date)?,
            None => Local::now().date_naive(),
        };

        let amount = Money::parse(&self.amount).map_err(|e| {
            LedgerError::Validation(format!("Invalid amount '{}': {}", self.amount, e))
        })?;

        let category = Category::parse_input(&self.category).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Invalid category '{}'. Use 'I' for Income or 'E' for Expense",
                self.category
            ))
        })?;

        let txn = Transaction::new(date, amount, category, self.description.clone());
        txn.validate()?;
        Ok(txn)
    }
}

/// Append one transaction, creating the store if needed
pub fn handle_add<W: Write>(
    store: &TransactionStore,
    args: &AddArgs,
    out: &mut W,
) -> LedgerResult<()> {
    let txn = args.to_transaction()?;

    store.initialize()?;
    store.append(&txn)?;

    writeln!(out, "Entry added successfully")?;
    writeln!(out, "  {}", txn)?;
    Ok(())
}

/// Print the report for a date range, optionally followed by the chart
pub fn handle_report<W: Write>(
    store: &TransactionStore,
    args: &ReportArgs,
    chart: &mut dyn ChartRenderer,
    out: &mut W,
) -> LedgerResult<()> {
    let start_date = parse_date(&args.from)?;
    let end_date = parse_date(&args.to)?;

    let report = RangeReport::generate(store, start_date, end_date)?;
    write!(out, "{}", report.format_terminal())?;

    if args.chart && !report.is_empty() {
        chart.render(&report.transactions)?;
    }

    Ok(())
}
