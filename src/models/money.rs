//! Money type for representing currency amounts
//!
//! Amounts are stored as cents (i64) so that derived aggregates stay exact;
//! persisted JSON round-trips without any floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from user input
    ///
    /// Accepts decimal dollars with an optional sign and currency symbol:
    /// `"10.50"`, `"$10.50"`, `"-3"`, `"10"`. Fractions beyond two digits
    /// are truncated to cents.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match s.split_once('.') {
            Some((dollars, fraction)) => {
                let dollars: i64 = parse_digits(dollars)?;
                let fraction_cents = match fraction.chars().count() {
                    0 => 0,
                    1 => parse_digits(fraction)? * 10,
                    _ => {
                        let head: String = fraction.chars().take(2).collect();
                        parse_digits(&head)?
                    }
                };
                dollars
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction_cents))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            }
            None => parse_digits(s)?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse a money amount, coercing any failure to zero
    ///
    /// This is the lenient contract relied on by income and allocation
    /// entry: non-numeric input silently becomes `$0.00`.
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Format without a currency symbol, e.g. `"10.50"` or `"-10.50"`
    pub fn plain(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }

    /// Format with a configurable currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            (self.0 / 100).abs(),
            (self.0 % 100).abs()
        )
    }
}

fn parse_digits(s: &str) -> Result<i64, MoneyParseError> {
    // An empty dollars part ("." or ".50") counts as zero.
    if s.is_empty() {
        return Ok(0);
    }
    // Pure digits only; i64::from_str would accept an inner sign.
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(s.to_string()));
    }
    s.parse()
        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
