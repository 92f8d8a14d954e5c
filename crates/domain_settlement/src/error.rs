//! Settlement domain errors
//!
//! The calculation functions themselves are total and never fail. These
//! errors only arise at the session boundary, where callers address methods
//! by id or hand over raw input.

use thiserror::Error;

use core_kernel::CoreError;

/// Errors that can occur in the settlement domain
#[derive(Debug, Error)]
pub enum SettlementError {
    /// Method id is not part of the catalog
    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// Input could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error raised by a kernel type
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SettlementError {
    /// Creates an unknown method error
    pub fn unknown_method(id: impl std::fmt::Display) -> Self {
        SettlementError::UnknownMethod(id.to_string())
    }

    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SettlementError::InvalidInput(message.into())
    }
}
