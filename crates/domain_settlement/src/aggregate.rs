//! Summing per-method breakdowns into a total summary

use crate::charges::ChargeBreakdown;

/// Sums breakdowns field by field
///
/// An empty input yields the all-zero breakdown. Because every part satisfies
/// the breakdown identities and addition is exact, so does the total.
///
/// # Example
///
/// ```rust
/// use domain_settlement::{aggregate, ChargeBreakdown};
///
/// let empty: Vec<ChargeBreakdown> = Vec::new();
/// assert_eq!(aggregate(&empty), ChargeBreakdown::zero());
/// ```
pub fn aggregate<I, B>(results: I) -> ChargeBreakdown
where
    I: IntoIterator<Item = B>,
    B: AsRef<ChargeBreakdown>,
{
    results
        .into_iter()
        .fold(ChargeBreakdown::zero(), |total, part| total + *part.as_ref())
}
