//! Locally persisted mirror of a user.

use crate::{AuthProvider, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    /// Assigned by the store, immutable
    pub id: Uuid,
    /// Expected unique in practice, not enforced
    pub email: String,
    /// Set once the record is linked to the external provider
    pub external_id: Option<String>,
    pub auth_provider: AuthProvider,
    pub email_verified: bool,
    /// Set at creation, never touched by reconciliation
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocalUser {
    /// Whole days since the record was created (never negative)
    pub fn account_age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}
