#![allow(dead_code)]

//! Test infrastructure for mirror-server API tests

use mirror_auth::{IdentityClaims, IdentityVerifier, VerifierOptions};
use mirror_config::SyncFailurePolicy;
use mirror_core::{LocalUser, NewUser, UserRole};
use mirror_db::{UserRepository, UserStore};
use mirror_server::AppState;

use axum::body::Body;
use http::{Request, Response, header::AUTHORIZATION};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"mirror-server-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    mirror_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state(policy: SyncFailurePolicy) -> AppState {
    let pool = create_test_pool().await;
    let verifier = IdentityVerifier::with_hs256(TEST_SECRET, &VerifierOptions::default());

    AppState::new(pool, verifier, policy)
}

pub fn claims(sub: &str, email: &str) -> IdentityClaims {
    let now = chrono::Utc::now().timestamp();

    IdentityClaims {
        sub: sub.to_string(),
        email: email.to_string(),
        email_verified: true,
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        profile_picture_url: None,
        exp: now + 3600,
        iat: now,
        iss: None,
    }
}

pub fn create_token(claims: &IdentityClaims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token")
}

pub fn bearer(sub: &str, email: &str) -> String {
    format!("Bearer {}", create_token(&claims(sub, email)))
}

pub fn authorized_request(method: &str, uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Create a user that signed up locally, before any provider login
pub async fn create_local_user(pool: &SqlitePool, email: &str, role: UserRole) -> LocalUser {
    UserRepository::new(pool.clone())
        .create(&NewUser::local(email, role))
        .await
        .expect("Failed to create local user")
}

/// Number of rows in `users`
pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
