//! The calculation pipeline: distribute, charge each method, aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, Rate};

use crate::aggregate::aggregate;
use crate::charges::{calculate_charges, ChargeBreakdown, MethodCharges};
use crate::distribution::{distribute_amount, total_explicit_distribution};
use crate::error::SettlementError;
use crate::method::PaymentMethodConfig;
use crate::{DEFAULT_INSTANT_SETTLEMENT_RATE, MAX_AMOUNT, MAX_RATE};

/// What the entered amount represents
///
/// Only labels depend on the mode; the arithmetic is identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationMode {
    /// One payment
    #[default]
    SingleTransaction,
    /// A month's worth of payments
    MonthlyVolume,
}

impl CalculationMode {
    /// Heading for the result summary
    pub fn summary_title(&self) -> &'static str {
        match self {
            CalculationMode::SingleTransaction => "Transaction Summary",
            CalculationMode::MonthlyVolume => "Monthly Volume Summary",
        }
    }

    /// Label for the amount input
    pub fn amount_label(&self) -> &'static str {
        match self {
            CalculationMode::SingleTransaction => "Transaction Amount",
            CalculationMode::MonthlyVolume => "Monthly Volume",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::SingleTransaction => "singleTransaction",
            CalculationMode::MonthlyVolume => "monthlyVolume",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the engine needs for one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub amount: Money,
    pub methods: Vec<PaymentMethodConfig>,
    pub use_instant_settlement: bool,
    pub settlement_rate: Rate,
    pub mode: CalculationMode,
}

impl CalculationRequest {
    /// Creates a request with instant settlement off and the default settlement rate
    pub fn new(amount: Money, methods: Vec<PaymentMethodConfig>) -> Self {
        Self {
            amount,
            methods,
            use_instant_settlement: false,
            settlement_rate: DEFAULT_INSTANT_SETTLEMENT_RATE,
            mode: CalculationMode::default(),
        }
    }

    pub fn with_instant_settlement(mut self, settlement_rate: Rate) -> Self {
        self.use_instant_settlement = true;
        self.settlement_rate = settlement_rate;
        self
    }

    pub fn with_mode(mut self, mode: CalculationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The methods taking part in the calculation
    pub fn selected_methods(&self) -> Vec<PaymentMethodConfig> {
        self.methods.iter().filter(|m| m.selected).cloned().collect()
    }

    /// Sum of explicit shares across selected methods
    pub fn total_distribution(&self) -> Decimal {
        total_explicit_distribution(&self.selected_methods())
    }

    /// Returns true if the shares of selected methods exceed 100%
    pub fn is_over_allocated(&self) -> bool {
        self.total_distribution() > Decimal::ONE
    }

    /// Returns true if there is something to calculate
    ///
    /// A non-positive amount or an empty selection means "no calculation";
    /// callers should skip the engine rather than show an all-zero result.
    pub fn is_calculable(&self) -> bool {
        self.amount.is_positive() && self.methods.iter().any(|m| m.selected)
    }

    /// Checks that every input is small enough for exact decimal arithmetic
    ///
    /// The amount must be within `MAX_AMOUNT`; rates, the settlement rate and
    /// explicit shares of selected methods within `MAX_RATE`.
    pub fn check_limits(&self) -> Result<(), SettlementError> {
        if self.amount.abs() > MAX_AMOUNT {
            return Err(SettlementError::invalid_input(format!(
                "amount {} is outside ±{}",
                self.amount.amount(),
                MAX_AMOUNT.amount()
            )));
        }
        if self.settlement_rate.as_decimal().abs() > MAX_RATE.as_decimal() {
            return Err(SettlementError::invalid_input(format!(
                "settlement rate {} is outside ±{}",
                self.settlement_rate, MAX_RATE
            )));
        }
        for method in self.methods.iter().filter(|m| m.selected) {
            let rate = method.effective_rate();
            if rate.as_decimal().abs() > MAX_RATE.as_decimal() {
                return Err(SettlementError::invalid_input(format!(
                    "rate {rate} for {} is outside ±{MAX_RATE}",
                    method.id
                )));
            }
            if let Some(share) = method.distribution {
                if share.abs() > MAX_RATE.as_decimal() {
                    return Err(SettlementError::invalid_input(format!(
                        "share {share} for {} is outside ±{}",
                        method.id,
                        MAX_RATE.as_decimal()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The outcome of one calculation
///
/// A result is a snapshot: any input change produces a new result that
/// replaces this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub amount: Money,
    pub per_method_results: Vec<MethodCharges>,
    pub total_summary: ChargeBreakdown,
    pub mode: CalculationMode,
    pub use_instant_settlement: bool,
    pub settlement_rate: Rate,
}

impl CalculationResult {
    /// Returns true if any method was charged an instant settlement fee
    pub fn has_instant_settlement_fee(&self) -> bool {
        !self.total_summary.instant_settlement_fee.is_zero()
    }

    /// Looks up the charges for one method
    pub fn method(&self, id: &str) -> Option<&MethodCharges> {
        self.per_method_results.iter().find(|r| r.method.id.as_str() == id)
    }
}

/// Checks `request` against the input limits, then runs [`calculate`]
pub fn try_calculate(request: &CalculationRequest) -> Result<CalculationResult, SettlementError> {
    request.check_limits()?;
    Ok(calculate(request))
}

/// Runs the full pipeline over the selected methods of `request`
///
/// Inputs beyond the limits checked by [`CalculationRequest::check_limits`]
/// can overflow the decimal range; use [`try_calculate`] for unchecked input.
///
/// This never fails. Unselected methods are ignored; with none selected the
/// total summary is the all-zero breakdown.
pub fn calculate(request: &CalculationRequest) -> CalculationResult {
    let selected = request.selected_methods();

    let per_method_results: Vec<MethodCharges> = distribute_amount(request.amount, &selected)
        .into_iter()
        .map(|allocation| {
            calculate_charges(
                allocation.amount,
                &allocation.method,
                request.use_instant_settlement,
                request.settlement_rate,
            )
        })
        .collect();

    let total_summary = aggregate(&per_method_results);

    CalculationResult {
        amount: request.amount,
        per_method_results,
        total_summary,
        mode: request.mode,
        use_instant_settlement: request.use_instant_settlement,
        settlement_rate: request.settlement_rate,
    }
}
