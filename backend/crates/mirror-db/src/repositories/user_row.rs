use crate::{Result as StoreErrorResult, StoreError};

use mirror_core::{AuthProvider, LocalUser, UserRole};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::FromRow;
use uuid::Uuid;

pub(crate) const USER_COLUMNS: &str =
    "id, email, external_id, auth_provider, email_verified, role, created_at, updated_at";

/// Raw `users` row as SQLite returns it
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub external_id: Option<String>,
    pub auth_provider: String,
    pub email_verified: bool,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<UserRow> for LocalUser {
    type Error = StoreError;

    #[track_caller]
    fn try_from(r: UserRow) -> StoreErrorResult<Self> {
        Ok(LocalUser {
            id: Uuid::parse_str(&r.id).map_err(|e| StoreError::Decode {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: r.email,
            external_id: r.external_id,
            auth_provider: AuthProvider::from_str(&r.auth_provider).map_err(|e| {
                StoreError::Decode {
                    message: format!("Invalid AuthProvider in users.auth_provider: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            email_verified: r.email_verified,
            role: UserRole::from_str(&r.role).map_err(|e| StoreError::Decode {
                message: format!("Invalid UserRole in users.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                StoreError::Decode {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                StoreError::Decode {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
