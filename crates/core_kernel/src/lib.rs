//! Core Kernel - Foundational types for the settlement calculator
//!
//! This crate provides the building blocks shared by the engine and its
//! surfaces:
//! - Rupee `Money` and fractional `Rate` with precise decimal arithmetic
//! - Payment method identifiers
//! - Display formatting for amounts and percentages

pub mod money;
pub mod identifiers;
pub mod format;
pub mod error;

pub use money::{Money, Rate, MoneyError, INR_DECIMAL_PLACES, INR_SYMBOL};
pub use identifiers::MethodId;
pub use format::{format_inr, format_percentage};
pub use error::CoreError;
