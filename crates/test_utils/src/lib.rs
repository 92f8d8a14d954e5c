//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! settlement calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built catalog methods and amounts
//! - `builders`: Builder patterns for methods and calculation requests
//! - `assertions`: Tolerance-based assertion helpers for breakdowns
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
