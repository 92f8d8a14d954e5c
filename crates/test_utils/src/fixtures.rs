//! Pre-built Test Fixtures
//!
//! Provides ready-to-use methods and amounts. Method fixtures are taken from
//! the standard catalog so tests follow any rate-card change.

use core_kernel::{Money, Rate};
use domain_settlement::{Catalog, PaymentMethodConfig};
use rust_decimal_macros::dec;

/// Fixture for catalog payment methods
pub struct MethodFixtures;

impl MethodFixtures {
    fn from_catalog(id: &str) -> PaymentMethodConfig {
        let catalog = Catalog::standard();
        let entry = catalog
            .get(id)
            .unwrap_or_else(|| panic!("standard catalog has no {id}"));
        PaymentMethodConfig::from_catalog(entry).selected(true)
    }

    /// UPI at 0.50%, selected
    pub fn upi() -> PaymentMethodConfig {
        Self::from_catalog("upi")
    }

    /// Credit Card at 2.00%, selected
    pub fn credit_card() -> PaymentMethodConfig {
        Self::from_catalog("creditCard")
    }

    /// Debit Card at 1.00%, selected
    pub fn debit_card() -> PaymentMethodConfig {
        Self::from_catalog("debitCard")
    }

    /// Net Banking at 1.50%, selected
    pub fn net_banking() -> PaymentMethodConfig {
        Self::from_catalog("netBanking")
    }

    /// Wallets at 1.75%, selected
    pub fn wallets() -> PaymentMethodConfig {
        Self::from_catalog("wallets")
    }

    /// Every catalog method, all selected
    pub fn all_selected() -> Vec<PaymentMethodConfig> {
        Catalog::standard()
            .entries()
            .iter()
            .map(|e| PaymentMethodConfig::from_catalog(e).selected(true))
            .collect()
    }
}

/// Fixture for amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// The calculator's default amount
    pub fn ten_thousand() -> Money {
        Money::new(dec!(10000))
    }

    /// An amount that splits evenly three ways
    pub fn nine_thousand() -> Money {
        Money::new(dec!(9000))
    }

    /// A typical monthly volume
    pub fn monthly_volume() -> Money {
        Money::new(dec!(2500000))
    }

    /// A refund-like negative amount
    pub fn refund() -> Money {
        Money::new(dec!(-1500))
    }
}

/// Fixture for rates
pub struct RateFixtures;

impl RateFixtures {
    /// The standard 0.25% instant settlement rate
    pub fn instant_settlement() -> Rate {
        Rate::new(dec!(0.0025))
    }

    /// A negotiated UPI rate
    pub fn negotiated_upi() -> Rate {
        Rate::new(dec!(0.003))
    }
}
