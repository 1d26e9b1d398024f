//! Store doubles for reconciler tests.

use mirror_core::{ErrorLocation, LocalUser, NewUser, UserFilter, UserPatch};
use mirror_db::{Result as StoreErrorResult, StoreError, UserRepository, UserStore};

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub(crate) async fn create_test_repository() -> UserRepository {
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

    UserRepository::new(pool)
}

/// Delegates to a real store, counting calls and optionally failing writes
pub(crate) struct InstrumentedStore {
    pub inner: UserRepository,
    pub fail_writes: bool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl InstrumentedStore {
    pub fn new(inner: UserRepository) -> Self {
        Self {
            inner,
            fail_writes: false,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn failing_writes(inner: UserRepository) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(inner)
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn write_failure(&self) -> StoreError {
        StoreError::Initialization {
            message: "simulated write failure".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl UserStore for InstrumentedStore {
    async fn find_one(&self, filter: &UserFilter) -> StoreErrorResult<Option<LocalUser>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_one(filter).await
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> StoreErrorResult<LocalUser> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(self.write_failure());
        }
        self.inner.update(id, patch).await
    }

    async fn create(&self, new_user: &NewUser) -> StoreErrorResult<LocalUser> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(self.write_failure());
        }
        self.inner.create(new_user).await
    }
}

/// Number of rows in `users`
pub(crate) async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
