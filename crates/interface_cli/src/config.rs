//! CLI configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use core_kernel::{Money, Rate};
use domain_settlement::{CalculationMode, SessionDefaults, DEFAULT_INSTANT_SETTLEMENT_RATE};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary and per-method table
    #[default]
    Table,
    /// The full calculation result as JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Amount used when none is given on the command line
    pub default_amount: Decimal,
    /// Mode used when none is given on the command line
    pub default_mode: CalculationMode,
    /// Instant settlement rate as a fraction
    pub instant_settlement_rate: Decimal,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// Output format used when none is given on the command line
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_amount: dec!(10000),
            default_mode: CalculationMode::SingleTransaction,
            instant_settlement_rate: DEFAULT_INSTANT_SETTLEMENT_RATE.as_decimal(),
            log_level: "info".to_string(),
            output_format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `SETTLEMENT_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("SETTLEMENT"))
    }

    /// Loads configuration from an environment source
    pub fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Session starting values derived from this configuration
    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            amount: Money::new(self.default_amount),
            mode: self.default_mode,
            use_instant_settlement: false,
            settlement_rate: Rate::new(self.instant_settlement_rate),
        }
    }
}
