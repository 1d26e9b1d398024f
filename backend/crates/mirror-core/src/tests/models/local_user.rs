use crate::{AuthProvider, LocalUser, UserRole};

use chrono::{Duration, Utc};
use uuid::Uuid;

fn user_created_days_ago(days: i64) -> LocalUser {
    let created_at = Utc::now() - Duration::days(days);
    LocalUser {
        id: Uuid::new_v4(),
        email: "a@x.com".to_string(),
        external_id: None,
        auth_provider: AuthProvider::Local,
        email_verified: false,
        role: UserRole::User,
        created_at,
        updated_at: created_at,
    }
}

#[test]
fn test_account_age_days() {
    let user = user_created_days_ago(10);

    assert_eq!(user.account_age_days(Utc::now()), 10);
}

#[test]
fn test_account_age_days_never_negative() {
    let user = user_created_days_ago(0);
    let before_creation = user.created_at - Duration::days(3);

    assert_eq!(user.account_age_days(before_creation), 0);
}
