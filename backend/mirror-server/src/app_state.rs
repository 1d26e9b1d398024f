use mirror_auth::{IdentityReconciler, IdentityVerifier};
use mirror_config::SyncFailurePolicy;
use mirror_db::UserRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub reconciler: Arc<IdentityReconciler<UserRepository>>,
    pub verifier: Arc<IdentityVerifier>,
    pub sync_policy: SyncFailurePolicy,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        verifier: IdentityVerifier,
        sync_policy: SyncFailurePolicy,
    ) -> Self {
        let reconciler = IdentityReconciler::new(UserRepository::new(pool.clone()));

        Self {
            pool,
            reconciler: Arc::new(reconciler),
            verifier: Arc::new(verifier),
            sync_policy,
        }
    }
}
