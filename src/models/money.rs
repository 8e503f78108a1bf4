//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents/bani) to avoid
//! floating-point precision issues. Provides safe arithmetic operations,
//! parsing, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
///
/// Using i64 minor units keeps sums exact for any realistic budget and
/// supports both positive and negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
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

    /// Apply a percentage to this amount, rounding to the nearest minor unit
    ///
    /// Used by allocation rules: `Money::from_major(5900).apply_percentage(30.0)`
    /// yields 1770.00.
    pub fn apply_percentage(&self, percent: f64) -> Self {
        Self((self.0 as f64 * percent / 100.0).round() as i64)
    }

    /// Multiply by an exchange rate, rounding to the nearest minor unit
    pub fn apply_rate(&self, rate: f64) -> Self {
        Self((self.0 as f64 * rate).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let minor = if let Some((whole, frac)) = s.split_once('.') {
            let major: i64 = whole.parse().map_err(|_| invalid())?;

            // Pad or truncate the fraction to 2 digits. `get` keeps a
            // non-ASCII fraction an error rather than a slice panic.
            let minor: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac
                    .get(..2)
                    .ok_or_else(invalid)?
                    .parse()
                    .map_err(|_| invalid())?,
            };

            major
                .checked_mul(100)
                .and_then(|m| m.checked_add(minor))
                .ok_or_else(invalid)?
        } else {
            s.parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency code suffix, e.g. "10.50 RON"
    pub fn format_with_code(&self, code: &str) -> String {
        format!("{} {}", self, code)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(10).minor(), 1000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00");
        assert_eq!(format!("{}", Money::from_minor(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_minor(5)), "0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_fraction() {
        assert!(Money::parse("10.€5").is_err());
        assert!(Money::parse("10.5€").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_amounts() {
        assert!(Money::parse("922337203685477581.00").is_err());
        assert!(Money::parse("9223372036854775807").is_err());
        assert!(Money::parse("-922337203685477581.00").is_err());
    }

    #[test]
    fn test_apply_percentage() {
        let leftover = Money::from_major(5900);
        assert_eq!(leftover.apply_percentage(30.0), Money::from_major(1770));
        assert_eq!(leftover.apply_percentage(20.0), Money::from_major(1180));
        assert_eq!(leftover.apply_percentage(40.0), Money::from_major(2360));
        assert_eq!(leftover.apply_percentage(10.0), Money::from_major(590));
    }

    #[test]
    fn test_apply_rate() {
        let amount = Money::from_major(100);
        assert_eq!(amount.apply_rate(4.97).minor(), 49700);
        assert_eq!(amount.apply_rate(1.0), amount);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn test_format_with_code() {
        assert_eq!(Money::from_minor(1050).format_with_code("RON"), "10.50 RON");
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
