//! Interactive field prompts
//!
//! Each prompt re-asks after invalid input, up to a fixed number of attempts,
//! printing a corrective message every time. Input and output are generic so
//! the prompts run the same against a terminal, a pipe or an in-memory buffer.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Category, Money, Transaction};

/// Attempts allowed per field before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Reads validated field values from a line-oriented input
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the retry bound (at least one attempt is always made)
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Writer that prompts and messages go to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line, without its line terminator
    pub fn line(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(LedgerError::InputClosed);
        }

        let trimmed = input.trim_end_matches(&['\n', '\r'][..]);
        Ok(trimmed.to_string())
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> LedgerResult<T> {
        for attempt in 1..=self.max_attempts {
            let line = self.line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    tracing::debug!(attempt, input = %line, "Rejected input");
                    writeln!(self.output, "{}", message)?;
                }
            }
        }

        Err(LedgerError::Validation(format!(
            "No valid value entered after {} attempts",
            self.max_attempts
        )))
    }

    /// Ask for a `dd-mm-yyyy` date; empty input means today when `allow_default` is set
    pub fn date(&mut self, prompt: &str, allow_default: bool) -> LedgerResult<NaiveDate> {
        self.ask(prompt, |line| {
            if allow_default && line.trim().is_empty() {
                return Ok(Local::now().date_naive());
            }
            parse_date(line).map_err(|_| "Invalid date format. Use dd-mm-yyyy".to_string())
        })
    }

    /// Ask for a non-negative amount; zero is accepted
    pub fn amount(&mut self) -> LedgerResult<Money> {
        self.ask("Enter the amount: ", |line| {
            let amount = Money::parse(line).map_err(|e| e.to_string())?;
            if amount.is_negative() {
                return Err("Amount must be a non-negative value".to_string());
            }
            Ok(amount)
        })
    }

    /// Ask for a category code (`I` or `E`)
    pub fn category(&mut self) -> LedgerResult<Category> {
        self.ask(
            "Enter the category ('I' for Income or 'E' for Expense): ",
            |line| {
                Category::from_code(line).ok_or_else(|| {
                    "Invalid category. Please enter 'I' for Income or 'E' for Expense".to_string()
                })
            },
        )
    }

    /// Ask for a free-form description; anything goes, including nothing
    pub fn description(&mut self) -> LedgerResult<String> {
        self.line("Enter a description (optional): ")
    }

    /// Ask a yes/no question; only `y` (any case) counts as yes
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        let answer = self.line(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Collect all fields of a new transaction
    pub fn transaction(&mut self) -> LedgerResult<Transaction> {
        let date = self.date(
            "Enter the date of the transaction (dd-mm-yyyy) or press enter for today's date: ",
            true,
        )?;
        let amount = self.amount()?;
        let category = self.category()?;
        let description = self.description()?;

        Ok(Transaction::new(date, amount, category, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn test_date_retries_until_valid() {
        let mut p = prompter("2024-01-01\n32-01-2024\n15-01-2024\n");

        let date = p.date("Date: ", false).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let output = output_of(&mut p);
        assert_eq!(output.matches("Invalid date format").count(), 2);
        assert_eq!(output.matches("Date: ").count(), 3);
    }

    #[test]
    fn test_date_default_is_today() {
        let mut p = prompter("\n");
        let date = p.date("Date: ", true).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }

    #[test]
    fn test_empty_date_without_default_is_rejected() {
        let mut p = prompter("\n01-01-2024\n");
        let date = p.date("Date: ", false).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(output_of(&mut p).contains("Invalid date format"));
    }

    #[test]
    fn test_amount_accepts_zero_and_rejects_negative() {
        let mut p = prompter("-5\nabc\n--5\n-0.001\n0\n");
        assert_eq!(p.amount().unwrap(), Money::zero());

        let output = output_of(&mut p);
        assert!(output.contains("Amount must be a non-negative value"));
        assert!(output.contains("Invalid money format: abc"));
        assert!(output.contains("Invalid money format: --5"));
        assert!(output.contains("Amount cannot have more than two decimal places"));
        assert_eq!(output.matches("Enter the amount: ").count(), 5);
    }

    #[test]
    fn test_amount_rejects_sub_cent_and_huge_values() {
        let mut p = prompter("0.005\n9e16\n0.01\n");
        assert_eq!(p.amount().unwrap(), Money::from_cents(1));

        let output = output_of(&mut p);
        assert!(output.contains("Amount cannot have more than two decimal places"));
        assert!(output.contains("Amount is too large"));
    }

    #[test]
    fn test_category_codes() {
        let mut p = prompter("x\ni\n");
        assert_eq!(p.category().unwrap(), Category::Income);
        assert!(output_of(&mut p).contains("Invalid category"));

        let mut p = prompter("E\n");
        assert_eq!(p.category().unwrap(), Category::Expense);
    }

    #[test]
    fn test_retry_is_bounded() {
        let mut p = prompter("a\nb\nc\n").with_max_attempts(2);
        let err = p.amount().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(output_of(&mut p).matches("Enter the amount: ").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("bad\n");
        assert!(matches!(p.amount(), Err(LedgerError::InputClosed)));
    }

    #[test]
    fn test_description_keeps_text() {
        let mut p = prompter("  lunch, with friends \r\n");
        assert_eq!(p.description().unwrap(), "  lunch, with friends ");

        let mut p = prompter("\n");
        assert_eq!(p.description().unwrap(), "");
    }

    #[test]
    fn test_confirm() {
        assert!(prompter("y\n").confirm("? ").unwrap());
        assert!(prompter("Y\n").confirm("? ").unwrap());
        assert!(!prompter("n\n").confirm("? ").unwrap());
        assert!(!prompter("yes\n").confirm("? ").unwrap());
    }

    #[test]
    fn test_transaction() {
        let mut p = prompter("01-01-2024\n100\nI\nsalary\n");
        let txn = p.transaction().unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(txn.amount, Money::from_cents(10000));
        assert_eq!(txn.category, Category::Income);
        assert_eq!(txn.description, "salary");
    }
}
