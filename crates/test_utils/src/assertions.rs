//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_settlement::ChargeBreakdown;
use rust_decimal::Decimal;

/// Default tolerance for amount comparisons (1e-9 rupees)
pub fn default_tolerance() -> Decimal {
    Decimal::new(1, 9)
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: Money, expected: Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts both breakdown identities within the default tolerance
///
/// # Panics
///
/// Panics if total deductions are not the sum of the four components, or if
/// the final settlement is not amount minus total deductions
pub fn assert_breakdown_consistent(breakdown: &ChargeBreakdown) {
    let tolerance = default_tolerance();
    let components = breakdown.pg_charges
        + breakdown.tax_on_charges
        + breakdown.instant_settlement_fee
        + breakdown.tax_on_instant_settlement;

    assert!(
        (components.amount() - breakdown.total_deductions.amount()).abs() <= tolerance,
        "Total deductions {} do not equal the sum of components {}",
        breakdown.total_deductions.amount(),
        components.amount()
    );

    let expected_final = breakdown.amount - breakdown.total_deductions;
    assert!(
        (expected_final.amount() - breakdown.final_settlement.amount()).abs() <= tolerance,
        "Final settlement {} does not equal amount minus deductions {}",
        breakdown.final_settlement.amount(),
        expected_final.amount()
    );
}

/// Asserts that two breakdowns agree field by field within the default tolerance
pub fn assert_breakdown_approx_eq(actual: &ChargeBreakdown, expected: &ChargeBreakdown) {
    let tolerance = default_tolerance();
    let fields = [
        ("amount", actual.amount, expected.amount),
        ("pg_charges", actual.pg_charges, expected.pg_charges),
        ("tax_on_charges", actual.tax_on_charges, expected.tax_on_charges),
        ("instant_settlement_fee", actual.instant_settlement_fee, expected.instant_settlement_fee),
        (
            "tax_on_instant_settlement",
            actual.tax_on_instant_settlement,
            expected.tax_on_instant_settlement,
        ),
        ("total_deductions", actual.total_deductions, expected.total_deductions),
        ("final_settlement", actual.final_settlement, expected.final_settlement),
    ];

    for (name, a, e) in fields {
        assert!(
            (a.amount() - e.amount()).abs() <= tolerance,
            "Field {} differs: actual={}, expected={}",
            name,
            a.amount(),
            e.amount()
        );
    }
}

/// Asserts that every field of a breakdown is zero
pub fn assert_breakdown_zero(breakdown: &ChargeBreakdown) {
    assert_breakdown_approx_eq(breakdown, &ChargeBreakdown::zero());
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_money_approx_eq_passes() {
        assert_money_approx_eq(Money::new(dec!(100.001)), Money::new(dec!(100.002)), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_assert_money_approx_eq_fails() {
        assert_money_approx_eq(Money::new(dec!(100)), Money::new(dec!(101)), dec!(0.01));
    }

    #[test]
    fn test_computed_breakdown_is_consistent() {
        let b = ChargeBreakdown::compute(Money::new(dec!(10000)), Rate::new(dec!(0.02)), None);
        assert_breakdown_consistent(&b);
    }

    #[test]
    #[should_panic(expected = "Final settlement")]
    fn test_tampered_breakdown_is_caught() {
        let mut b = ChargeBreakdown::compute(Money::new(dec!(10000)), Rate::new(dec!(0.02)), None);
        b.final_settlement = Money::new(dec!(10000));
        assert_breakdown_consistent(&b);
    }

    #[test]
    fn test_zero_breakdown() {
        assert_breakdown_zero(&ChargeBreakdown::zero());
    }
}
