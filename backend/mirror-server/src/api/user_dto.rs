use mirror_core::LocalUser;

use serde::Serialize;

/// Local user record for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub external_id: Option<String>,
    pub auth_provider: String,
    pub email_verified: bool,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<LocalUser> for UserDto {
    fn from(u: LocalUser) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            external_id: u.external_id,
            auth_provider: u.auth_provider.to_string(),
            email_verified: u.email_verified,
            role: u.role.to_string(),
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
