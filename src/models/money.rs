//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides overflow-checked addition, decimal parsing and two-decimal
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_log::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
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

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a plain decimal string
    ///
    /// Accepts "10.50", "-10.50", "10", ".5" and "10.". Currency symbols, a
    /// leading `+`, exponents and digit separators are rejected. More than
    /// two fractional digits are accepted and rounded half away from zero to the
    /// nearest cent, so "10.005" becomes 10.01.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow)?
        };

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or(MoneyParseError::Overflow)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain two-decimal form ("10.50", "-20.00"), as written to the expense file
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part());
        f.pad(&text)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    Overflow,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-2000).to_string(), "-20.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(1050)), "   10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("€"), "-€10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
    }

    #[test]
    fn test_checked_add_overflow() {
        let big = Money::parse("90000000000000000").unwrap();
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)),
            None
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("  12.00 ").unwrap().cents(), 1200);
    }

    #[test]
    fn test_parse_rounds_extra_precision() {
        assert_eq!(Money::parse("10.005").unwrap().cents(), 1001);
        assert_eq!(Money::parse("10.004").unwrap().cents(), 1000);
        assert_eq!(Money::parse("3.14159").unwrap().cents(), 314);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
        assert_eq!(Money::parse("-2.345").unwrap().cents(), -235);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1,000").is_err());
        assert!(Money::parse("$5").is_err());
        assert!(Money::parse("+7").is_err());
        assert!(Money::parse("+$7").is_err());
        assert!(Money::parse("5$").is_err());
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
