//! Per-method charge calculation
//!
//! Applies a PG rate, GST on that charge and an optional instant-settlement
//! fee (with its own GST) to one amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use core_kernel::{Money, Rate};

use crate::method::PaymentMethodConfig;
use crate::TAX_RATE;

/// The charges deducted from one amount
///
/// Every breakdown satisfies
/// `total_deductions = pg_charges + tax_on_charges + instant_settlement_fee + tax_on_instant_settlement`
/// and `final_settlement = amount - total_deductions`. Both hold exactly,
/// since no component is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    /// Base amount the charges are computed on
    pub amount: Money,
    /// amount x effective rate
    pub pg_charges: Money,
    /// GST on the PG charge
    pub tax_on_charges: Money,
    /// amount x settlement rate, or zero without instant settlement
    pub instant_settlement_fee: Money,
    /// GST on the instant settlement fee
    pub tax_on_instant_settlement: Money,
    pub total_deductions: Money,
    pub final_settlement: Money,
}

impl ChargeBreakdown {
    /// The all-zero breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes a breakdown for `amount` at `rate`
    ///
    /// `instant_settlement` carries the settlement rate when the option is
    /// enabled. No input is rejected: zero, negative or out-of-range values
    /// propagate proportionally into the result.
    pub fn compute(amount: Money, rate: Rate, instant_settlement: Option<Rate>) -> Self {
        let pg_charges = rate.apply(&amount);
        let tax_on_charges = TAX_RATE.apply(&pg_charges);

        let (instant_settlement_fee, tax_on_instant_settlement) = match instant_settlement {
            Some(settlement_rate) => {
                let fee = settlement_rate.apply(&amount);
                (fee, TAX_RATE.apply(&fee))
            }
            None => (Money::ZERO, Money::ZERO),
        };

        let total_deductions =
            pg_charges + tax_on_charges + instant_settlement_fee + tax_on_instant_settlement;

        Self {
            amount,
            pg_charges,
            tax_on_charges,
            instant_settlement_fee,
            tax_on_instant_settlement,
            total_deductions,
            final_settlement: amount - total_deductions,
        }
    }

    /// Returns true if both breakdown identities hold within `tolerance`
    pub fn is_consistent(&self, tolerance: Decimal) -> bool {
        let deductions = self.pg_charges
            + self.tax_on_charges
            + self.instant_settlement_fee
            + self.tax_on_instant_settlement;

        deductions.approx_eq(&self.total_deductions, tolerance)
            && (self.amount - self.total_deductions).approx_eq(&self.final_settlement, tolerance)
    }

    /// Total GST across both taxed components
    pub fn total_tax(&self) -> Money {
        self.tax_on_charges + self.tax_on_instant_settlement
    }

    /// Deductions as a fraction of the amount; zero for a zero amount
    pub fn effective_deduction_rate(&self) -> Rate {
        if self.amount.is_zero() {
            return Rate::ZERO;
        }
        Rate::new(self.total_deductions.amount() / self.amount.amount())
    }

    /// Labelled deduction components with a positive value, in display order
    pub fn deduction_components(&self) -> Vec<(DeductionKind, Money)> {
        [
            (DeductionKind::PgCharges, self.pg_charges),
            (DeductionKind::TaxOnCharges, self.tax_on_charges),
            (DeductionKind::InstantSettlementFee, self.instant_settlement_fee),
            (DeductionKind::TaxOnInstantSettlement, self.tax_on_instant_settlement),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_positive())
        .collect()
    }
}

impl Add for ChargeBreakdown {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            amount: self.amount + other.amount,
            pg_charges: self.pg_charges + other.pg_charges,
            tax_on_charges: self.tax_on_charges + other.tax_on_charges,
            instant_settlement_fee: self.instant_settlement_fee + other.instant_settlement_fee,
            tax_on_instant_settlement: self.tax_on_instant_settlement
                + other.tax_on_instant_settlement,
            total_deductions: self.total_deductions + other.total_deductions,
            final_settlement: self.final_settlement + other.final_settlement,
        }
    }
}

/// The kinds of deduction a breakdown carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeductionKind {
    PgCharges,
    TaxOnCharges,
    InstantSettlementFee,
    TaxOnInstantSettlement,
}

impl DeductionKind {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            DeductionKind::PgCharges => "PG Charges",
            DeductionKind::TaxOnCharges => "GST on PG",
            DeductionKind::InstantSettlementFee => "Instant Settlement",
            DeductionKind::TaxOnInstantSettlement => "GST on Settlement",
        }
    }
}

/// Charges for one payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCharges {
    /// The method as configured for this calculation
    pub method: PaymentMethodConfig,
    /// Rate the PG charge was computed with
    pub effective_rate: Rate,
    #[serde(flatten)]
    pub breakdown: ChargeBreakdown,
}

impl AsRef<ChargeBreakdown> for ChargeBreakdown {
    fn as_ref(&self) -> &ChargeBreakdown {
        self
    }
}

impl AsRef<ChargeBreakdown> for MethodCharges {
    fn as_ref(&self) -> &ChargeBreakdown {
        &self.breakdown
    }
}

/// Calculates the charges for one method on one amount
///
/// The method's custom rate is used when set, its default rate otherwise.
/// With `use_instant_settlement` false the settlement fee and its tax are
/// zero whatever `settlement_rate` holds.
pub fn calculate_charges(
    amount: Money,
    method: &PaymentMethodConfig,
    use_instant_settlement: bool,
    settlement_rate: Rate,
) -> MethodCharges {
    let effective_rate = method.effective_rate();
    let settlement = use_instant_settlement.then_some(settlement_rate);

    MethodCharges {
        method: method.clone(),
        effective_rate,
        breakdown: ChargeBreakdown::compute(amount, effective_rate, settlement),
    }
}
