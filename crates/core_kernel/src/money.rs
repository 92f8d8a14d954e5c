//! Money and rate types with precise decimal arithmetic
//!
//! All settlement amounts are Indian Rupees. `Money` keeps the full decimal
//! precision of every operation; rounding to paise only happens when a value
//! is formatted for display.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places in a rupee amount (paise)
pub const INR_DECIMAL_PLACES: u32 = 2;

/// Rupee sign used in formatted output
pub const INR_SYMBOL: &str = "₹";

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// An amount of Indian Rupees
///
/// Amounts may be zero or negative; the settlement engine is total over its
/// numeric domain and never rejects a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero rupees
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new Money value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount in paise
    pub fn from_paise(paise: i64) -> Self {
        Self(Decimal::new(paise, INR_DECIMAL_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Parses user-entered text, coercing anything unparsable to zero
    ///
    /// Surrounding whitespace and Indian digit-group separators are ignored.
    pub fn parse_or_zero(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Divides into `parts` equal shares; zero parts yields zero
    pub fn split_evenly(&self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(parts))
    }

    /// Rounds half away from zero to whole paise
    pub fn round_to_paise(&self) -> Self {
        Self(self.0.round_dp_with_strategy(
            INR_DECIMAL_PLACES,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Returns true if `other` is within `tolerance` of this amount
    pub fn approx_eq(&self, other: &Money, tolerance: Decimal) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        let cleaned = cleaned.strip_prefix(INR_SYMBOL).unwrap_or(&cleaned);
        Decimal::from_str(cleaned)
            .map(Money)
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_inr(*self))
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

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Mul<Rate> for Money {
    type Output = Self;

    fn mul(self, rate: Rate) -> Self {
        rate.apply(&self)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A fractional rate (e.g., a PG charge or tax rate)
///
/// Stored as a fraction: `0.005` is 0.5%. Out-of-range values (negative or
/// above 1) are accepted and simply flow into the arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// A zero rate
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Creates a rate from a fraction (e.g., 0.05 for 5%)
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / dec!(100))
    }

    /// Parses a percentage typed by a user, coercing unparsable text to zero
    pub fn parse_percentage_or_zero(input: &str) -> Self {
        Decimal::from_str(input.trim().trim_end_matches('%').trim())
            .map(Self::from_percentage)
            .unwrap_or_default()
    }

    /// Returns the rate as a fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * dec!(100)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_percentage(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_money_from_paise() {
        let m = Money::from_paise(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_parse_or_zero_coerces_garbage() {
        assert_eq!(Money::parse_or_zero("abc"), Money::ZERO);
        assert_eq!(Money::parse_or_zero(""), Money::ZERO);
        assert_eq!(Money::parse_or_zero(" 10000 ").amount(), dec!(10000));
        assert_eq!(Money::parse_or_zero("₹1,00,000").amount(), dec!(100000));
    }

    #[test]
    fn test_split_evenly() {
        let m = Money::new(dec!(9000));
        assert_eq!(m.split_evenly(3).amount(), dec!(3000));
        assert_eq!(m.split_evenly(0), Money::ZERO);
    }

    #[test]
    fn test_round_to_paise_half_away_from_zero() {
        assert_eq!(Money::new(dec!(2.345)).round_to_paise().amount(), dec!(2.35));
        assert_eq!(Money::new(dec!(-2.345)).round_to_paise().amount(), dec!(-2.35));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(0.5));
        let amount = Money::new(dec!(10000));

        assert_eq!(rate.apply(&amount).amount(), dec!(50));
        assert_eq!((amount * rate).amount(), dec!(50));
    }

    #[test]
    fn test_rate_parsing() {
        assert_eq!(Rate::parse_percentage_or_zero("0.5%").as_decimal(), dec!(0.005));
        assert_eq!(Rate::parse_percentage_or_zero("x"), Rate::ZERO);
        assert_eq!(Rate::parse_percentage_or_zero("2").as_decimal(), dec!(0.02));
    }

    #[test]
    fn test_money_serializes_as_bare_decimal() {
        let json = serde_json::to_string(&Money::new(dec!(59))).unwrap();
        assert_eq!(json, "\"59\"");
    }
}
