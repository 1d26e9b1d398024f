//! Storage boundary for user records.

use crate::Result as StoreErrorResult;

use mirror_core::{LocalUser, NewUser, UserFilter, UserPatch};

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

/// Document-style user store: exact-match lookups, create, and update by id.
///
/// Implementations own connection handling. Callers get no retries, caching
/// or cross-call transactions from this trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// First record matching the filter, if any (`LIMIT 1`)
    async fn find_one(&self, filter: &UserFilter) -> StoreErrorResult<Option<LocalUser>>;

    /// Apply a partial update and return the record as stored
    async fn update(&self, id: Uuid, patch: &UserPatch) -> StoreErrorResult<LocalUser>;

    /// Insert a record; the store assigns `id`, `created_at` and `updated_at`
    async fn create(&self, new_user: &NewUser) -> StoreErrorResult<LocalUser>;
}

#[async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn find_one(&self, filter: &UserFilter) -> StoreErrorResult<Option<LocalUser>> {
        (**self).find_one(filter).await
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> StoreErrorResult<LocalUser> {
        (**self).update(id, patch).await
    }

    async fn create(&self, new_user: &NewUser) -> StoreErrorResult<LocalUser> {
        (**self).create(new_user).await
    }
}
