//! Interactive three-option menu
//!
//! Loops over add / view report / exit until the user exits or input ends.
//! Errors from an action are printed and the menu carries on.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::reports::RangeReport;
use crate::storage::TransactionStore;
use crate::tui::ChartRenderer;

use super::prompt::Prompter;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Report,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Report),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until exit
pub fn run_menu<R: BufRead, W: Write>(
    store: &TransactionStore,
    prompter: &mut Prompter<R, W>,
    chart: &mut dyn ChartRenderer,
) -> LedgerResult<()> {
    loop {
        let out = prompter.output();
        writeln!(out)?;
        writeln!(out, "1. Add a new transaction")?;
        writeln!(out, "2. View transactions and summary within a date range")?;
        writeln!(out, "3. Exit")?;

        let choice = match prompter.line("Enter your choice (1-3): ") {
            Ok(choice) => choice,
            Err(LedgerError::InputClosed) => {
                writeln!(prompter.output())?;
                break;
            }
            Err(e) => return Err(e),
        };

        let result = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_transaction(store, prompter),
            Some(MenuChoice::Report) => view_report(store, prompter, chart),
            Some(MenuChoice::Exit) => break,
            None => {
                writeln!(prompter.output(), "Invalid choice. Enter 1, 2 or 3.")?;
                continue;
            }
        };

        match result {
            Ok(()) => {}
            Err(LedgerError::InputClosed) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Menu action failed");
                writeln!(prompter.output(), "Error: {}", e)?;
            }
        }
    }

    writeln!(prompter.output(), "Exiting...")?;
    Ok(())
}

fn add_transaction<R: BufRead, W: Write>(
    store: &TransactionStore,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    store.initialize()?;
    let txn = prompter.transaction()?;
    store.append(&txn)?;
    writeln!(prompter.output(), "Entry added successfully")?;
    Ok(())
}

fn view_report<R: BufRead, W: Write>(
    store: &TransactionStore,
    prompter: &mut Prompter<R, W>,
    chart: &mut dyn ChartRenderer,
) -> LedgerResult<()> {
    let start_date = prompter.date("Enter the start date (dd-mm-yyyy): ", false)?;
    let end_date = prompter.date("Enter the end date (dd-mm-yyyy): ", false)?;

    let report = RangeReport::generate(store, start_date, end_date)?;
    writeln!(prompter.output())?;
    write!(prompter.output(), "{}", report.format_terminal())?;

    if !report.is_empty() && prompter.confirm("Do you want to see a plot? (y/n) ")? {
        chart.render(&report.transactions)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingChart {
        calls: Vec<usize>,
    }

    impl ChartRenderer for RecordingChart {
        fn render(&mut self, transactions: &[Transaction]) -> LedgerResult<()> {
            self.calls.push(transactions.len());
            Ok(())
        }
    }

    fn run(store: &TransactionStore, input: &str, chart: &mut RecordingChart) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_menu(store, &mut prompter, chart).unwrap();
        String::from_utf8(prompter.output().clone()).unwrap()
    }

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = TransactionStore::new(temp_dir.path().join("finance_data.csv"));
        (temp_dir, store)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Report));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_add_then_exit() {
        let (_temp_dir, store) = create_test_store();
        let mut chart = RecordingChart::default();

        let output = run(&store, "1\n01-01-2024\n100\nI\nsalary\n3\n", &mut chart);

        assert!(output.contains("Entry added successfully"));
        assert!(output.ends_with("Exiting...\n"));
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].amount, Money::from_cents(10000));
        assert_eq!(loaded[0].category, Category::Income);
    }

    #[test]
    fn test_report_with_plot() {
        let (_temp_dir, store) = create_test_store();
        let mut chart = RecordingChart::default();

        let input = "1\n01-01-2024\n100\nI\nsalary\n\
                     1\n15-01-2024\n30\nE\nbooks\n\
                     2\n01-01-2024\n31-01-2024\ny\n3\n";
        let output = run(&store, input, &mut chart);

        assert!(output.contains("Total Income: $100.00"));
        assert!(output.contains("Total Expense: $30.00"));
        assert!(output.contains("Net Savings: $70.00"));
        assert_eq!(chart.calls, vec![2]);
    }

    #[test]
    fn test_empty_report_skips_plot_question() {
        let (_temp_dir, store) = create_test_store();
        store.initialize().unwrap();
        let mut chart = RecordingChart::default();

        let output = run(&store, "2\n01-01-2024\n31-01-2024\n3\n", &mut chart);

        assert!(output.contains("No transactions found in the given date range."));
        assert!(!output.contains("see a plot"));
        assert!(chart.calls.is_empty());
    }

    #[test]
    fn test_report_without_store_keeps_menu_running() {
        let (_temp_dir, store) = create_test_store();
        let mut chart = RecordingChart::default();

        let output = run(&store, "2\n01-01-2024\n31-01-2024\n3\n", &mut chart);

        assert!(output.contains("Error: Transaction store not found"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_invalid_choice_loops() {
        let (_temp_dir, store) = create_test_store();
        let mut chart = RecordingChart::default();

        let output = run(&store, "9\nabc\n3\n", &mut chart);

        assert_eq!(output.matches("Invalid choice").count(), 2);
        assert_eq!(output.matches("Enter your choice (1-3): ").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, store) = create_test_store();
        let mut chart = RecordingChart::default();

        let output = run(&store, "1\n01-01-2024\n", &mut chart);

        assert!(output.ends_with("Exiting...\n"));
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "date,amount,category,description\n");
    }
}
