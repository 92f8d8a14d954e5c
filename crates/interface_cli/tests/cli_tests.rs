//! End-to-end tests for the calculate and methods commands

use clap::Parser;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use interface_cli::args::{CalculateArgs, Cli, Commands};
use core_kernel::CoreError;
use domain_settlement::SettlementError;
use interface_cli::config::{CliConfig, OutputFormat};
use interface_cli::error::CliError;
use interface_cli::{build_session, run_calculate, run_methods};
use test_utils::assert_breakdown_consistent;

fn calculate_args(argv: &[&str]) -> CalculateArgs {
    let mut full = vec!["pg-settlement", "calculate"];
    full.extend_from_slice(argv);
    match Cli::try_parse_from(full).unwrap().command {
        Commands::Calculate(args) => args,
        Commands::Methods => panic!("expected calculate"),
    }
}

mod session_building {
    use super::*;

    #[test]
    fn test_defaults_come_from_config() {
        let config = CliConfig {
            default_amount: dec!(20000),
            ..CliConfig::default()
        };
        let session = build_session(&calculate_args(&[]), &config).unwrap();

        assert_eq!(session.amount().amount(), dec!(20000));
        let result = session.result().unwrap();
        assert_eq!(result.total_summary.pg_charges.amount(), dec!(100));
    }

    #[test]
    fn test_method_list_replaces_default_selection() {
        let args = calculate_args(&["--method", "creditCard", "--method", "wallets"]);
        let session = build_session(&args, &CliConfig::default()).unwrap();
        let result = session.result().unwrap();

        assert_eq!(result.per_method_results.len(), 2);
        assert!(result.method("upi").is_none());
        assert_eq!(result.method("wallets").unwrap().breakdown.amount.amount(), dec!(5000));
    }

    #[test]
    fn test_rates_and_shares() {
        let args = calculate_args(&[
            "--amount", "10000",
            "--method", "upi",
            "--method", "creditCard",
            "--share", "upi=60",
            "--rate", "creditCard=1.8",
            "--instant-settlement",
        ]);
        let session = build_session(&args, &CliConfig::default()).unwrap();
        let result = session.result().unwrap();

        let card = result.method("creditCard").unwrap();
        assert_eq!(card.breakdown.amount.amount(), dec!(4000));
        assert_eq!(card.breakdown.pg_charges.amount(), dec!(72));
        assert_eq!(result.total_summary.instant_settlement_fee.amount(), dec!(25));
        assert_breakdown_consistent(&result.total_summary);
    }

    #[test]
    fn test_settlement_rate_flag_is_percent() {
        let args = calculate_args(&["--instant-settlement", "--settlement-rate", "0.5"]);
        let session = build_session(&args, &CliConfig::default()).unwrap();

        assert_eq!(session.settlement_rate().as_decimal(), dec!(0.005));
        assert_eq!(
            session.result().unwrap().total_summary.instant_settlement_fee.amount(),
            dec!(50)
        );
    }

    #[test]
    fn test_unknown_method_is_an_error() {
        let args = calculate_args(&["--method", "cheque"]);
        let err = build_session(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("cheque"));
    }

    #[test]
    fn test_malformed_method_id_is_a_validation_error() {
        let args = calculate_args(&["--share", "credit card=40"]);
        let err = build_session(&args, &CliConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Settlement(SettlementError::Core(CoreError::Validation(_)))
        ));
    }

    #[test]
    fn test_amount_beyond_decimal_range_is_rejected() {
        let args = calculate_args(&["--amount", "79228162514264337593543950335", "--rate", "upi=-5"]);
        let err = run_calculate(&args, &CliConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Settlement(SettlementError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_oversized_rate_is_rejected() {
        let args = calculate_args(&["--amount", "1000000000000000000000000000", "--rate", "upi=10000"]);
        assert!(run_calculate(&args, &CliConfig::default()).is_err());

        let args = calculate_args(&["--amount", "10000", "--rate", "upi=100000.01"]);
        let err = run_calculate(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("upi"));
    }

    #[test]
    fn test_largest_accepted_inputs_calculate() {
        let args = calculate_args(&[
            "--amount", "1000000000000000",
            "--rate", "upi=100000",
            "--instant-settlement",
            "--settlement-rate", "-100000",
        ]);
        let session = build_session(&args, &CliConfig::default()).unwrap();
        assert_breakdown_consistent(&session.result().unwrap().total_summary);
    }

    #[test]
    fn test_negative_amount_has_no_result() {
        let args = calculate_args(&["--amount", "-1500"]);
        let session = build_session(&args, &CliConfig::default()).unwrap();
        assert!(session.result().is_none());
    }
}

mod output {
    use super::*;

    #[test]
    fn test_table_output() {
        let args = calculate_args(&["--amount", "₹10,000"]);
        let out = run_calculate(&args, &CliConfig::default()).unwrap();

        assert!(out.contains("Transaction Summary"));
        assert!(out.contains("₹9,941.00"));
    }

    #[test]
    fn test_json_output_follows_flag_over_config() {
        let args = calculate_args(&["--format", "json"]);
        let out = run_calculate(&args, &CliConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        let settled: Decimal = json["totalSummary"]["finalSettlement"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(settled, dec!(9941));
    }

    #[test]
    fn test_json_from_config() {
        let config = CliConfig {
            output_format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = run_calculate(&calculate_args(&["--mode", "monthly"]), &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["mode"], "monthlyVolume");
    }

    #[test]
    fn test_methods_listing() {
        let out = run_methods();
        assert!(out.contains("Corporate Credit Card"));
        assert!(out.contains("2.75%"));
    }
}
