//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so totals add up exactly. Text
//! input finer than a cent is rejected, so a stored amount always reads back
//! as the value that was entered.

use std::fmt;

/// Largest magnitude accepted from text, in cents
///
/// Well inside the range where `f64` holds every cent exactly.
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

const SUB_CENT_TOLERANCE: f64 = 1e-6;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Round a decimal amount to the nearest cent
    ///
    /// Values larger in magnitude than [`MAX_CENTS`] are rejected.
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange);
        }
        Ok(Self(cents as i64))
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, or `None` if the result leaves the `i64` range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, or `None` if the result leaves the `i64` range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// The amount as a floating point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts a decimal number ("10.50", "-10.5", "1e3"), optionally prefixed
    /// with `$` after the sign. At most one sign is allowed, and amounts finer
    /// than a cent are rejected rather than rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let number = rest.strip_prefix('$').unwrap_or(rest);
        if number.starts_with('-') || (negative && number.starts_with('+')) {
            return Err(invalid());
        }

        let value: f64 = number.parse().map_err(|_| invalid())?;
        let money = Self::from_f64(if negative { -value } else { value })?;
        if finer_than_cent(number, value) {
            return Err(MoneyParseError::SubCent);
        }
        Ok(money)
    }

    /// Plain decimal form with two fractional digits, as written to the store
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Plain decimals are judged by their digits; exponent forms by value
fn finer_than_cent(number: &str, value: f64) -> bool {
    if number.contains(|c: char| c == 'e' || c == 'E') {
        let scaled = value * 100.0;
        return (scaled - scaled.round()).abs() > SUB_CENT_TOLERANCE;
    }
    number
        .split_once('.')
        .map_or(false, |(_, fraction)| fraction.trim_end_matches('0').len() > 2)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite,
    OutOfRange,
    SubCent,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite => write!(f, "Amount must be a finite number"),
            MoneyParseError::OutOfRange => write!(f, "Amount is too large"),
            MoneyParseError::SubCent => {
                write!(f, "Amount cannot have more than two decimal places")
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
