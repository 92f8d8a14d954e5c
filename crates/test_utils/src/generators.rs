//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating amounts, rates, shares and
//! payment methods.

use core_kernel::{Money, Rate};
use domain_settlement::{ChargeBreakdown, PaymentMethodConfig};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive amounts in paise (up to 10 crore rupees)
pub fn positive_amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000_000i64).prop_map(Money::from_paise)
}

/// Strategy for amounts that may be zero or negative
pub fn any_amount_strategy() -> impl Strategy<Value = Money> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(Money::from_paise)
}

/// Strategy for PG rates between 0% and 5% in basis points
pub fn pg_rate_strategy() -> impl Strategy<Value = Rate> {
    (0i64..500i64).prop_map(|bp| Rate::new(Decimal::new(bp, 4)))
}

/// Strategy for settlement rates between 0% and 1%
pub fn settlement_rate_strategy() -> impl Strategy<Value = Rate> {
    (0i64..100i64).prop_map(|bp| Rate::new(Decimal::new(bp, 4)))
}

/// Strategy for optional shares: `None` or a whole percent from 1% to 100%
pub fn share_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        Just(None),
        (1i64..=100i64).prop_map(|pct| Some(Decimal::new(pct, 2))),
    ]
}

/// Strategy for a selected method with an optional custom rate and no share
pub fn method_strategy() -> impl Strategy<Value = PaymentMethodConfig> {
    (0u32..1000u32, pg_rate_strategy(), proptest::option::of(pg_rate_strategy())).prop_map(
        |(n, rate, custom)| {
            let method = PaymentMethodConfig::new(format!("method{n}"), format!("Method {n}"), rate)
                .selected(true);
            match custom {
                Some(custom) => method.with_custom_rate(custom),
                None => method,
            }
        },
    )
}

/// Strategy for 1..=max selected methods whose explicit shares total at most 100%
///
/// Shares are assigned left to right and dropped once they would overflow,
/// so the generated set always satisfies the completeness precondition.
pub fn bounded_methods_strategy(max: usize) -> impl Strategy<Value = Vec<PaymentMethodConfig>> {
    proptest::collection::vec((method_strategy(), share_strategy()), 1..=max).prop_map(|pairs| {
        let mut allocated = Decimal::ZERO;
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (method, share))| {
                let mut method = method;
                method.id = format!("method{i}").into();
                match share {
                    Some(s) if allocated + s <= Decimal::ONE => {
                        allocated += s;
                        method.with_distribution(s)
                    }
                    _ => method,
                }
            })
            .collect()
    })
}

/// Strategy for consistent breakdowns computed by the engine
pub fn breakdown_strategy() -> impl Strategy<Value = ChargeBreakdown> {
    (
        any_amount_strategy(),
        pg_rate_strategy(),
        proptest::option::of(settlement_rate_strategy()),
    )
        .prop_map(|(amount, rate, settlement)| ChargeBreakdown::compute(amount, rate, settlement))
}
