//! Tests for identifier validation errors

use core_kernel::error::CoreError;
use core_kernel::MethodId;

#[test]
fn test_method_id_with_space_is_rejected() {
    let error = "upi card".parse::<MethodId>().unwrap_err();

    match error {
        CoreError::Validation(msg) => assert!(msg.contains("upi card")),
    }
}

#[test]
fn test_empty_method_id_is_rejected() {
    let error = "   ".parse::<MethodId>().unwrap_err();
    assert!(error.to_string().starts_with("Validation error"));
}

#[test]
fn test_catalog_style_ids_parse() {
    for id in ["upi", "creditCard", "net_banking", "wallet-2"] {
        assert_eq!(id.parse::<MethodId>().unwrap().as_str(), id);
    }
}
