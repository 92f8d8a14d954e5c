//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};

use domain_settlement::CalculationMode;

use crate::config::OutputFormat;

/// Payment gateway settlement calculator.
///
/// Estimates PG charges, GST and instant settlement fees for an amount
/// split across payment methods.
#[derive(Parser, Debug)]
#[command(name = "pg-settlement", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate charges and the final settlement for an amount.
    Calculate(CalculateArgs),
    /// List the payment methods and their default rates.
    Methods,
}

/// What the amount stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Single,
    Monthly,
}

impl From<ModeArg> for CalculationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => CalculationMode::SingleTransaction,
            ModeArg::Monthly => CalculationMode::MonthlyVolume,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CalculateArgs {
    /// Amount in rupees; commas and a leading ₹ are accepted.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Treat the amount as a single transaction or a monthly volume.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Method to include; repeat for several. Defaults to the catalog selection.
    #[arg(long = "method", value_name = "ID")]
    pub methods: Vec<String>,

    /// Negotiated rate for a method, in percent.
    #[arg(long = "rate", value_name = "ID=PERCENT", value_parser = parse_assignment)]
    pub rates: Vec<(String, String)>,

    /// Share of the amount routed through a method, in percent.
    #[arg(long = "share", value_name = "ID=PERCENT", value_parser = parse_assignment)]
    pub shares: Vec<(String, String)>,

    /// Add the instant settlement fee and its GST.
    #[arg(long)]
    pub instant_settlement: bool,

    /// Instant settlement rate in percent.
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub settlement_rate: Option<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Splits `upi=0.3` into `("upi", "0.3")`
pub fn parse_assignment(input: &str) -> Result<(String, String), String> {
    let (id, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PERCENT, got {input:?}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing method id in {input:?}"));
    }
    Ok((id.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("upi=60").unwrap(),
            ("upi".to_string(), "60".to_string())
        );
        assert_eq!(
            parse_assignment(" creditCard = 1.8% ").unwrap(),
            ("creditCard".to_string(), "1.8%".to_string())
        );
        assert!(parse_assignment("upi").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_calculate_flags() {
        let cli = Cli::try_parse_from([
            "pg-settlement",
            "calculate",
            "--amount",
            "1,00,000",
            "--mode",
            "monthly",
            "--method",
            "upi",
            "--method",
            "wallets",
            "--share",
            "upi=70",
            "--instant-settlement",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.amount.as_deref(), Some("1,00,000"));
        assert_eq!(args.mode, Some(ModeArg::Monthly));
        assert_eq!(args.methods, vec!["upi", "wallets"]);
        assert_eq!(args.shares, vec![("upi".to_string(), "70".to_string())]);
        assert!(args.instant_settlement);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_rejects_malformed_rate() {
        assert!(Cli::try_parse_from(["pg-settlement", "calculate", "--rate", "upi"]).is_err());
    }

    #[test]
    fn test_methods_subcommand() {
        let cli = Cli::try_parse_from(["pg-settlement", "methods"]).unwrap();
        assert!(matches!(cli.command, Commands::Methods));
    }
}
