//! Command-line interface for the settlement calculator
//!
//! Parses arguments, layers them over [`config::CliConfig`], drives a
//! [`CalculatorSession`] and renders the result.
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{args::CalculateArgs, config::CliConfig, run_calculate};
//!
//! let args = CalculateArgs {
//!     amount: Some("10000".to_string()),
//!     ..CalculateArgs::default()
//! };
//! let out = run_calculate(&args, &CliConfig::default()).unwrap();
//! assert!(out.contains("₹9,941.00"));
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod render;

use core_kernel::{MethodId, Rate};
use domain_settlement::{CalculatorSession, Catalog, SettlementError};

use crate::args::CalculateArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Builds a session from configuration defaults and command-line overrides
pub fn build_session(args: &CalculateArgs, config: &CliConfig) -> Result<CalculatorSession, CliError> {
    let mut defaults = config.session_defaults();
    if let Some(mode) = args.mode {
        defaults.mode = mode.into();
    }
    defaults.use_instant_settlement = args.instant_settlement;
    if let Some(rate) = &args.settlement_rate {
        defaults.settlement_rate = Rate::parse_percentage_or_zero(rate);
    }

    let mut session = CalculatorSession::with_defaults(Catalog::standard(), defaults);

    if let Some(amount) = &args.amount {
        session.set_amount_input(amount);
    }

    if !args.methods.is_empty() {
        let listed = args
            .methods
            .iter()
            .map(|id| parse_method_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        for id in &listed {
            session.select_method(id.as_str(), true)?;
        }
        let unlisted: Vec<MethodId> = session
            .catalog()
            .entries()
            .iter()
            .map(|e| e.id().clone())
            .filter(|id| !listed.contains(id))
            .collect();
        for id in unlisted {
            session.select_method(id.as_str(), false)?;
        }
    }

    for (id, rate) in &args.rates {
        session.set_custom_rate_input(parse_method_id(id)?.as_str(), rate)?;
    }
    for (id, share) in &args.shares {
        session.set_distribution_input(parse_method_id(id)?.as_str(), share)?;
    }

    session.request().check_limits()?;

    tracing::debug!(
        amount = %session.amount().amount(),
        mode = %session.mode(),
        methods = session.methods().iter().filter(|m| m.selected).count(),
        "Session ready"
    );

    Ok(session)
}

fn parse_method_id(id: &str) -> Result<MethodId, SettlementError> {
    Ok(id.parse::<MethodId>()?)
}

/// Runs the `calculate` command and returns its output
pub fn run_calculate(args: &CalculateArgs, config: &CliConfig) -> Result<String, CliError> {
    let session = build_session(args, config)?;
    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Table => Ok(render::render_table(&session)),
        OutputFormat::Json => render::render_json(&session),
    }
}

/// Runs the `methods` command and returns its output
pub fn run_methods() -> String {
    render::render_methods(&Catalog::standard())
}
