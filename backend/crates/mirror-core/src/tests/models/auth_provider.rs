use crate::{AuthProvider, CoreError};

use std::str::FromStr;

#[test]
fn test_auth_provider_as_str() {
    assert_eq!(AuthProvider::Local.as_str(), "local");
    assert_eq!(AuthProvider::External.as_str(), "external");
    assert_eq!(AuthProvider::Both.as_str(), "both");
}

#[test]
fn test_auth_provider_from_str() {
    assert_eq!(
        AuthProvider::from_str("local").unwrap(),
        AuthProvider::Local
    );
    assert_eq!(
        AuthProvider::from_str("external").unwrap(),
        AuthProvider::External
    );
    assert_eq!(AuthProvider::from_str("both").unwrap(), AuthProvider::Both);
}

#[test]
fn test_auth_provider_from_str_rejects_unknown() {
    let result = AuthProvider::from_str("workos");

    assert!(matches!(
        result,
        Err(CoreError::InvalidAuthProvider { ref value, .. }) if value == "workos"
    ));
}

#[test]
fn test_auth_provider_serializes_snake_case() {
    let json = serde_json::to_string(&AuthProvider::Both).unwrap();
    assert_eq!(json, "\"both\"");
}
