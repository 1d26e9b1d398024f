use crate::{AuthProvider, ExternalIdentity};

use serde::{Deserialize, Serialize};

/// Partial update of a user record. `None` leaves a field untouched.
///
/// `role` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub external_id: Option<String>,
    pub auth_provider: Option<AuthProvider>,
    pub email_verified: Option<bool>,
}

impl UserPatch {
    /// Mirror the identity fields and set the given provider tag.
    pub fn from_identity(identity: &ExternalIdentity, auth_provider: AuthProvider) -> Self {
        Self {
            email: Some(identity.email.clone()),
            external_id: Some(identity.external_id.clone()),
            auth_provider: Some(auth_provider),
            email_verified: Some(identity.email_verified),
        }
    }
}
