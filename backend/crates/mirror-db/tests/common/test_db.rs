use mirror_core::{LocalUser, NewUser, UserRole};
use mirror_db::{UserRepository, UserStore};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    mirror_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user that signed up without the external provider
pub async fn create_local_user(repo: &UserRepository, email: &str, role: UserRole) -> LocalUser {
    repo.create(&NewUser::local(email, role))
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
