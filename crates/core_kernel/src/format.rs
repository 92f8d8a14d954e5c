//! Display formatting for rupee amounts and percentages
//!
//! Formatting is presentation-only: it rounds a copy of the value and never
//! feeds back into stored amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::money::{Money, INR_DECIMAL_PLACES, INR_SYMBOL};

/// Formats an amount as Indian Rupees with Indian digit grouping
///
/// The last three integer digits form one group and every group above that
/// has two digits, e.g. `₹1,23,45,678.90`. Values are rounded half away from
/// zero to two decimal places; negative values carry a leading minus sign.
///
/// # Example
///
/// ```rust
/// use core_kernel::{format_inr, Money};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(Money::new(dec!(9941))), "₹9,941.00");
/// assert_eq!(format_inr(Money::new(dec!(12345678.9))), "₹1,23,45,678.90");
/// ```
pub fn format_inr(money: Money) -> String {
    let rounded = money.round_to_paise().amount();
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.dp$}", rounded.abs(), dp = INR_DECIMAL_PLACES as usize);

    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits.as_str(), "00"),
    };

    let sign = if negative { "-" } else { "" };
    format!("{sign}{INR_SYMBOL}{}.{fraction}", group_indian(integer))
}

/// Formats a fractional value as a percentage with two decimal places
///
/// `0.005` becomes `0.50%`.
pub fn format_percentage(fraction: Decimal) -> String {
    let pct = (fraction * dec!(100)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", pct)
}

/// Inserts Indian digit-group separators into a run of ASCII digits
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
