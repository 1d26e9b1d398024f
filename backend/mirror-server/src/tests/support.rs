use mirror_auth::IdentityReconciler;
use mirror_core::ExternalIdentity;
use mirror_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    mirror_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) async fn create_test_reconciler() -> IdentityReconciler<UserRepository> {
    IdentityReconciler::new(UserRepository::new(create_test_pool().await))
}

pub(crate) fn identity(external_id: &str, email: &str) -> ExternalIdentity {
    ExternalIdentity {
        external_id: external_id.to_string(),
        email: email.to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email_verified: true,
        profile_picture_url: None,
    }
}
