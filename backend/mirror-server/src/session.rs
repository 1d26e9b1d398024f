//! Session boundary: where reconciliation meets the request flow.
//!
//! The reconciler always reports failures. Whether a failure blocks the
//! authenticated request is decided here, from the configured
//! [`SyncFailurePolicy`].

use crate::{ApiError, ApiResult};

use mirror_auth::{IdentityReconciler, SyncError};
use mirror_config::SyncFailurePolicy;
use mirror_core::{ExternalIdentity, LocalUser};
use mirror_db::UserStore;

use log::{error, info, warn};

/// Reconcile `identity` and apply `policy` to a failure.
///
/// `Ok(None)` means the sync failed and the policy let the request through.
pub async fn sync_identity<S: UserStore>(
    reconciler: &IdentityReconciler<S>,
    policy: SyncFailurePolicy,
    identity: &ExternalIdentity,
) -> ApiResult<Option<LocalUser>> {
    match reconciler.reconcile_with_outcome(identity).await {
        Ok((user, outcome)) => {
            info!(
                "Synced {} as user {} ({})",
                identity.email, user.id, outcome
            );
            Ok(Some(user))
        }
        Err(e) => apply_policy(policy, identity, e),
    }
}

#[track_caller]
fn apply_policy(
    policy: SyncFailurePolicy,
    identity: &ExternalIdentity,
    e: SyncError,
) -> ApiResult<Option<LocalUser>> {
    match policy {
        SyncFailurePolicy::FailOpen => {
            error!(
                "Sync failed for external id {}, continuing: {}",
                identity.external_id, e
            );
            Ok(None)
        }
        SyncFailurePolicy::FailClosed => {
            error!(
                "Sync failed for external id {}, rejecting: {}",
                identity.external_id, e
            );
            Err(ApiError::from(e))
        }
    }
}

/// Read-only lookup where a store failure counts as "not found".
pub async fn lookup_or_none<S: UserStore>(
    reconciler: &IdentityReconciler<S>,
    external_id: &str,
) -> Option<LocalUser> {
    match reconciler.lookup_by_external_id(external_id).await {
        Ok(user) => user,
        Err(e) => {
            warn!("Lookup of external id {} failed: {}", external_id, e);
            None
        }
    }
}
