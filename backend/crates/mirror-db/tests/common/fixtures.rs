use mirror_core::{AuthProvider, NewUser, UserRole};

/// A provider-authenticated user with sensible defaults
pub fn external_new_user(external_id: &str, email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        external_id: Some(external_id.to_string()),
        auth_provider: AuthProvider::External,
        email_verified: true,
        role: UserRole::User,
    }
}
