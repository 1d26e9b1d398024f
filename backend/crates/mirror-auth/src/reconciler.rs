//! Identity reconciliation: map a provider identity onto a local user record.
//!
//! Lookup order is external id first, then email. Once a record is linked,
//! later logins always take the external-id path and never re-enter the
//! email-linking branch (which rewrites `auth_provider`).
//!
//! ## Concurrency
//!
//! The reads and the single write are not wrapped in a transaction. Two
//! concurrent first logins for the same identity can both miss and both
//! create, leaving two records. The schema does not prevent this.

use crate::{ReconcileOutcome, SyncResult};

use mirror_core::{AuthProvider, ExternalIdentity, LocalUser, NewUser, UserFilter, UserPatch};
use mirror_db::UserStore;

use log::{debug, info};

pub struct IdentityReconciler<S> {
    store: S,
}

impl<S: UserStore> IdentityReconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Find, link, or create the local record for `identity`.
    pub async fn reconcile(&self, identity: &ExternalIdentity) -> SyncResult<LocalUser> {
        let (user, _) = self.reconcile_with_outcome(identity).await?;
        Ok(user)
    }

    /// Same as [`reconcile`](Self::reconcile), also reporting the branch taken.
    pub async fn reconcile_with_outcome(
        &self,
        identity: &ExternalIdentity,
    ) -> SyncResult<(LocalUser, ReconcileOutcome)> {
        if let Some(existing) = self
            .store
            .find_one(&UserFilter::ExternalId(identity.external_id.clone()))
            .await?
        {
            // A linked local account keeps accepting both paths
            let auth_provider = match existing.auth_provider {
                AuthProvider::Both => AuthProvider::Both,
                _ => AuthProvider::External,
            };
            let patch = UserPatch::from_identity(identity, auth_provider);
            let user = self.store.update(existing.id, &patch).await?;

            debug!(
                "Refreshed user {} for external id {}",
                user.id, identity.external_id
            );
            return Ok((user, ReconcileOutcome::Updated));
        }

        if let Some(existing) = self
            .store
            .find_one(&UserFilter::Email(identity.email.clone()))
            .await?
        {
            let patch = UserPatch::from_identity(identity, AuthProvider::Both);
            let user = self.store.update(existing.id, &patch).await?;

            info!(
                "Linked existing user {} ({}) to external id {}",
                user.id, user.email, identity.external_id
            );
            return Ok((user, ReconcileOutcome::Linked));
        }

        let user = self.store.create(&NewUser::from_identity(identity)).await?;

        info!(
            "Created user {} ({}) for external id {}",
            user.id, user.email, identity.external_id
        );
        Ok((user, ReconcileOutcome::Created))
    }

    /// Read-only lookup by the provider's user id
    pub async fn lookup_by_external_id(&self, external_id: &str) -> SyncResult<Option<LocalUser>> {
        let user = self
            .store
            .find_one(&UserFilter::ExternalId(external_id.to_string()))
            .await?;
        Ok(user)
    }

    /// Read-only lookup by email
    pub async fn lookup_by_email(&self, email: &str) -> SyncResult<Option<LocalUser>> {
        let user = self
            .store
            .find_one(&UserFilter::Email(email.to_string()))
            .await?;
        Ok(user)
    }
}
