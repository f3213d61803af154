//! Transaction category
//!
//! A closed set of two categories. User input is matched through an explicit
//! code table; the store only ever holds the full labels.

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

/// Short input codes and the category each one stands for
pub const CATEGORY_CODES: [(&str, Category); 2] =
    [("I", Category::Income), ("E", Category::Expense)];

impl Category {
    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[Category::Income, Category::Expense]
    }

    /// The label written to the store
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Look up a short code (`I` or `E`), ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        CATEGORY_CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, category)| *category)
    }

    /// Accept either a short code or a label, ignoring case
    pub fn parse_input(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_code(input).or_else(|| {
            Self::all()
                .iter()
                .copied()
                .find(|c| c.label().eq_ignore_ascii_case(input))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the exact stored label
impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| LedgerError::Validation(format!("Unknown category '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Category::from_code("I"), Some(Category::Income));
        assert_eq!(Category::from_code("e"), Some(Category::Expense));
        assert_eq!(Category::from_code(" i "), Some(Category::Income));
        assert_eq!(Category::from_code("X"), None);
        assert_eq!(Category::from_code(""), None);
        assert_eq!(Category::from_code("Income"), None);
    }

    #[test]
    fn test_parse_input_accepts_labels() {
        assert_eq!(Category::parse_input("income"), Some(Category::Income));
        assert_eq!(Category::parse_input("EXPENSE"), Some(Category::Expense));
        assert_eq!(Category::parse_input("E"), Some(Category::Expense));
        assert_eq!(Category::parse_input("savings"), None);
    }

    #[test]
    fn test_stored_label_is_exact() {
        assert_eq!("Income".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("Expense".parse::<Category>().unwrap(), Category::Expense);
        assert!("income".parse::<Category>().is_err());
        assert!("I".parse::<Category>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Income.to_string(), "Income");
        assert_eq!(Category::Expense.to_string(), "Expense");
    }
}
