use crate::{AuthProvider, ExternalIdentity, UserRole};

use serde::{Deserialize, Serialize};

/// Fields for creating a user record. The store assigns `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub external_id: Option<String>,
    pub auth_provider: AuthProvider,
    pub email_verified: bool,
    pub role: UserRole,
}

impl NewUser {
    /// A record authenticated only through the external provider, with the default role.
    pub fn from_identity(identity: &ExternalIdentity) -> Self {
        Self {
            email: identity.email.clone(),
            external_id: Some(identity.external_id.clone()),
            auth_provider: AuthProvider::External,
            email_verified: identity.email_verified,
            role: UserRole::User,
        }
    }

    /// A record created through a non-provider signup path.
    pub fn local(email: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            external_id: None,
            auth_provider: AuthProvider::Local,
            email_verified: false,
            role,
        }
    }
}
