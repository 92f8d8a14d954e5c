//! Splitting a total amount across payment methods
//!
//! Methods with an explicit non-zero share get `amount * share`. The rest
//! split whatever is left, `amount * max(0, 1 - explicit total)`, evenly.
//! With no explicit shares at all this is a plain even split.
//!
//! Explicit shares summing above 1 are not clamped here. Warning about that
//! is left to whoever collects the input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::method::PaymentMethodConfig;

/// The sub-amount assigned to one method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodAllocation {
    /// The method, with `distribution` set to its resolved share
    pub method: PaymentMethodConfig,
    /// The amount routed through the method
    pub amount: Money,
}

/// Sum of the explicit shares among `methods`
pub fn total_explicit_distribution(methods: &[PaymentMethodConfig]) -> Decimal {
    methods.iter().filter_map(|m| m.explicit_distribution()).sum()
}

/// Share of the total left for methods without an explicit share
pub fn remaining_distribution(methods: &[PaymentMethodConfig]) -> Decimal {
    (Decimal::ONE - total_explicit_distribution(methods)).max(Decimal::ZERO)
}

fn implicit_count(methods: &[PaymentMethodConfig]) -> usize {
    methods
        .iter()
        .filter(|m| m.explicit_distribution().is_none())
        .count()
}

/// Resolves the share every method ends up with
///
/// Returns one share per method, in input order.
pub fn resolve_shares(methods: &[PaymentMethodConfig]) -> Vec<Decimal> {
    let implicit = implicit_count(methods);
    let implicit_share = if implicit == 0 {
        Decimal::ZERO
    } else {
        remaining_distribution(methods) / Decimal::from(implicit)
    };

    methods
        .iter()
        .map(|m| m.explicit_distribution().unwrap_or(implicit_share))
        .collect()
}

/// Assigns each method its sub-amount of `amount`
///
/// The methods are taken as given; callers pass the selected ones. Implicit
/// sub-amounts divide the remaining amount rather than multiplying by a
/// rounded share, so an even three-way split of 9000 is exactly 3000 each.
pub fn distribute_amount(amount: Money, methods: &[PaymentMethodConfig]) -> Vec<MethodAllocation> {
    let implicit_amount = (amount * remaining_distribution(methods)).split_evenly(implicit_count(methods));

    methods
        .iter()
        .zip(resolve_shares(methods))
        .map(|(method, share)| {
            let sub_amount = match method.explicit_distribution() {
                Some(explicit) => amount * explicit,
                None => implicit_amount,
            };
            MethodAllocation {
                method: method.clone().with_distribution(share),
                amount: sub_amount,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Rate;
    use rust_decimal_macros::dec;

    fn method(id: &str, share: Option<Decimal>) -> PaymentMethodConfig {
        let m = PaymentMethodConfig::new(id, id, Rate::new(dec!(0.01))).selected(true);
        match share {
            Some(s) => m.with_distribution(s),
            None => m,
        }
    }

    #[test]
    fn test_explicit_shares() {
        let methods = vec![method("upi", Some(dec!(0.6))), method("creditCard", Some(dec!(0.4)))];
        let allocations = distribute_amount(Money::new(dec!(10000)), &methods);

        assert_eq!(allocations[0].amount.amount(), dec!(6000));
        assert_eq!(allocations[1].amount.amount(), dec!(4000));
    }

    #[test]
    fn test_even_split_without_shares() {
        let methods = vec![method("a", None), method("b", None), method("c", None)];
        let allocations = distribute_amount(Money::new(dec!(9000)), &methods);

        for allocation in &allocations {
            assert_eq!(allocation.amount.amount(), dec!(3000));
        }
    }

    #[test]
    fn test_implicit_methods_share_remainder() {
        let methods = vec![method("a", Some(dec!(0.5))), method("b", None), method("c", None)];
        let allocations = distribute_amount(Money::new(dec!(10000)), &methods);

        assert_eq!(allocations[0].amount.amount(), dec!(5000));
        assert_eq!(allocations[1].amount.amount(), dec!(2500));
        assert_eq!(allocations[2].amount.amount(), dec!(2500));
        assert_eq!(allocations[1].method.distribution, Some(dec!(0.25)));
    }

    #[test]
    fn test_zero_share_counts_as_implicit() {
        let methods = vec![method("a", Some(dec!(0))), method("b", None)];
        let shares = resolve_shares(&methods);
        assert_eq!(shares, vec![dec!(0.5), dec!(0.5)]);
    }

    #[test]
    fn test_overflow_is_not_clamped() {
        let methods = vec![method("a", Some(dec!(0.8))), method("b", Some(dec!(0.5))), method("c", None)];
        let allocations = distribute_amount(Money::new(dec!(1000)), &methods);

        assert_eq!(total_explicit_distribution(&methods), dec!(1.3));
        assert_eq!(allocations[0].amount.amount(), dec!(800));
        assert_eq!(allocations[1].amount.amount(), dec!(500));
        assert_eq!(allocations[2].amount, Money::ZERO);
    }

    #[test]
    fn test_empty_input() {
        assert!(distribute_amount(Money::new(dec!(1000)), &[]).is_empty());
        assert_eq!(remaining_distribution(&[]), Decimal::ONE);
    }
}
