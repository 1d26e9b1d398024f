use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_round_trips_through_str() {
    for role in [UserRole::User, UserRole::Admin] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_from_str_rejects_unknown() {
    assert!(UserRole::from_str("superuser").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::User);
}
