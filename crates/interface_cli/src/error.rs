//! CLI error handling

use thiserror::Error;

use domain_settlement::SettlementError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Settlement(#[from] SettlementError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
