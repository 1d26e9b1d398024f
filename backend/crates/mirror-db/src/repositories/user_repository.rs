//! SQLite-backed user store.
//!
//! Every lookup is an exact match on one column with `LIMIT 1`. When several
//! rows share the value (possible, since neither `email` nor `external_id` is
//! unique) the oldest row wins.

use crate::repositories::user_row::{USER_COLUMNS, UserRow};
use crate::{Result as StoreErrorResult, StoreError, UserStore};

use mirror_core::{LocalUser, NewUser, UserFilter, UserPatch};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreErrorResult<Option<LocalUser>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalUser::try_from).transpose()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_one(&self, filter: &UserFilter) -> StoreErrorResult<Option<LocalUser>> {
        // field() only ever yields a fixed column name
        let sql = format!(
            "SELECT {} FROM users WHERE {} = ? ORDER BY created_at, rowid LIMIT 1",
            USER_COLUMNS,
            filter.field()
        );

        debug!("find_one({})", filter);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(filter.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalUser::try_from).transpose()
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> StoreErrorResult<LocalUser> {
        let sql = format!(
            r#"
                UPDATE users
                SET email = COALESCE(?, email),
                    external_id = COALESCE(?, external_id),
                    auth_provider = COALESCE(?, auth_provider),
                    email_verified = COALESCE(?, email_verified),
                    updated_at = ?
                WHERE id = ?
                RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(patch.email.as_deref())
            .bind(patch.external_id.as_deref())
            .bind(patch.auth_provider.map(|p| p.as_str()))
            .bind(patch.email_verified)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => LocalUser::try_from(row),
            None => Err(StoreError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn create(&self, new_user: &NewUser) -> StoreErrorResult<LocalUser> {
        let sql = format!(
            r#"
                INSERT INTO users (
                    id, email, external_id, auth_provider, email_verified, role,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING {}
            "#,
            USER_COLUMNS
        );
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(&new_user.email)
            .bind(new_user.external_id.as_deref())
            .bind(new_user.auth_provider.as_str())
            .bind(new_user.email_verified)
            .bind(new_user.role.as_str())
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        LocalUser::try_from(row)
    }
}
