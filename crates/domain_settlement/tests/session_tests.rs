//! Tests for the interactive calculator session

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;
use std::cell::Cell;
use std::rc::Rc;

use domain_settlement::{
    calculate, CalculationMode, CalculatorSession, Catalog, SessionDefaults,
};
use test_utils::assert_breakdown_consistent;

mod recomputation {
    use super::*;

    #[test]
    fn test_result_always_matches_fresh_calculation() {
        let mut session = CalculatorSession::new(Catalog::standard());
        session.select_method("creditCard", true).unwrap();
        session.set_distribution_input("upi", "60").unwrap();
        session.set_instant_settlement(true);

        let expected = calculate(&session.request());
        assert_eq!(session.result(), Some(&expected));
        assert_eq!(
            session.result().unwrap().method("creditCard").unwrap().breakdown.amount.amount(),
            dec!(4000)
        );
    }

    #[test]
    fn test_each_change_notifies_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut session = CalculatorSession::new(Catalog::standard());
        session.subscribe(move |_| counter.set(counter.get() + 1));

        session.set_mode(CalculationMode::MonthlyVolume);
        session.set_settlement_rate(Rate::new(dec!(0.003)));
        session.set_instant_settlement(true);
        session.select_method("wallets", true).unwrap();

        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_failed_edit_does_not_notify() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut session = CalculatorSession::new(Catalog::standard());
        session.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(session.set_custom_rate("cheque", Rate::ZERO).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_monthly_mode_keeps_totals() {
        let mut session = CalculatorSession::new(Catalog::standard());
        let single = session.result().unwrap().total_summary;

        session.set_mode(CalculationMode::MonthlyVolume);
        let monthly = session.result().unwrap();

        assert_eq!(monthly.total_summary, single);
        assert_eq!(monthly.mode.summary_title(), "Monthly Volume Summary");
    }
}

mod defaults {
    use super::*;

    #[test]
    fn test_custom_defaults() {
        let defaults = SessionDefaults {
            amount: Money::new(dec!(50000)),
            mode: CalculationMode::MonthlyVolume,
            use_instant_settlement: true,
            settlement_rate: Rate::new(dec!(0.0025)),
        };
        let session = CalculatorSession::with_defaults(Catalog::standard(), defaults);
        let result = session.result().unwrap();

        assert_eq!(result.total_summary.instant_settlement_fee.amount(), dec!(125));
        assert_breakdown_consistent(&result.total_summary);
    }

    #[test]
    fn test_zero_default_amount_has_no_result() {
        let defaults = SessionDefaults {
            amount: Money::ZERO,
            ..SessionDefaults::default()
        };
        let session = CalculatorSession::with_defaults(Catalog::standard(), defaults);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_catalog_is_untouched_by_overrides() {
        let mut session = CalculatorSession::new(Catalog::standard());
        session.set_custom_rate("upi", Rate::new(dec!(0.001))).unwrap();

        assert_eq!(session.catalog(), &Catalog::standard());
        assert_eq!(
            CalculatorSession::new(Catalog::standard()).methods()[0].custom_rate,
            None
        );
    }
}
