//! PG settlement calculator binary
//!
//! # Usage
//!
//! ```bash
//! pg-settlement calculate --amount 10000
//! pg-settlement calculate --amount 250000 --mode monthly --method upi --method creditCard \
//!     --share upi=60 --rate creditCard=1.8 --instant-settlement
//! pg-settlement methods
//! ```
//!
//! # Environment Variables
//!
//! * `SETTLEMENT_DEFAULT_AMOUNT` - Amount when `--amount` is omitted (default: 10000)
//! * `SETTLEMENT_DEFAULT_MODE` - singleTransaction or monthlyVolume (default: singleTransaction)
//! * `SETTLEMENT_INSTANT_SETTLEMENT_RATE` - Fraction, e.g. 0.0025 (default: 0.0025)
//! * `SETTLEMENT_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `SETTLEMENT_OUTPUT_FORMAT` - table or json (default: table)

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::args::{Cli, Commands};
use interface_cli::config::CliConfig;
use interface_cli::{run_calculate, run_methods};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config();

    init_tracing(&config.log_level);

    let output = match cli.command {
        Commands::Calculate(args) => {
            run_calculate(&args, &config).context("calculation failed")?
        }
        Commands::Methods => run_methods(),
    };

    print!("{output}");
    Ok(())
}

/// Loads configuration, falling back to defaults when the environment is unusable
fn load_config() -> CliConfig {
    CliConfig::from_env().unwrap_or_else(|err| {
        eprintln!("Ignoring invalid SETTLEMENT_* configuration: {err}");
        CliConfig::default()
    })
}

/// Initializes the tracing subscriber on stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
