//! Settlement Calculation Domain
//!
//! This crate computes what an Indian merchant actually receives after a
//! payment gateway takes its cut. For a transaction (or a month's volume)
//! split across payment methods it derives, per method and in total:
//!
//! - **PG charges**: amount x the method's rate
//! - **GST on charges**: 18% of the PG charge
//! - **Instant settlement fee**: optional, amount x settlement rate
//! - **GST on the settlement fee**
//! - **Total deductions** and the **final settlement**
//!
//! # Pipeline
//!
//! ```text
//! request -> distribute_amount -> calculate_charges (per method) -> aggregate
//! ```
//!
//! Every stage is a pure function. `CalculatorSession` wraps the pipeline for
//! interactive use and reruns it on every input change.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Money, Rate};
//! use domain_settlement::{calculate_charges, PaymentMethodConfig};
//! use rust_decimal_macros::dec;
//!
//! let upi = PaymentMethodConfig::new("upi", "UPI", Rate::new(dec!(0.005)));
//! let charges = calculate_charges(Money::new(dec!(10000)), &upi, false, Rate::ZERO);
//!
//! assert_eq!(charges.breakdown.total_deductions.amount(), dec!(59));
//! assert_eq!(charges.breakdown.final_settlement.amount(), dec!(9941));
//! ```

pub mod catalog;
pub mod method;
pub mod charges;
pub mod aggregate;
pub mod distribution;
pub mod calculation;
pub mod session;
pub mod error;

pub use catalog::{Catalog, CatalogEntry};
pub use method::{merge, MethodOverride, PaymentMethodConfig};
pub use charges::{calculate_charges, ChargeBreakdown, DeductionKind, MethodCharges};
pub use aggregate::aggregate;
pub use distribution::{
    distribute_amount, remaining_distribution, resolve_shares, total_explicit_distribution,
    MethodAllocation,
};
pub use calculation::{
    calculate, try_calculate, CalculationMode, CalculationRequest, CalculationResult,
};
pub use session::{CalculatorSession, DistributionWarning, Listener, SessionDefaults};
pub use error::SettlementError;

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;

/// GST levied on PG charges and on instant settlement fees (18%)
pub const TAX_RATE: Rate = Rate::new(dec!(0.18));

/// Instant settlement fee used when none is configured (0.25%)
pub const DEFAULT_INSTANT_SETTLEMENT_RATE: Rate = Rate::new(dec!(0.0025));

/// Largest amount magnitude accepted by [`try_calculate`] (₹10^15)
pub const MAX_AMOUNT: Money = Money::new(dec!(1000000000000000));

/// Largest rate or share magnitude accepted by [`try_calculate`] (100000%)
pub const MAX_RATE: Rate = Rate::new(dec!(1000));
