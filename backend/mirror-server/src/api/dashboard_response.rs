use mirror_core::{ExternalIdentity, LocalUser, UserRole};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Protected dashboard view.
///
/// Email and verification come from the verified identity; dates and role
/// from the local record, with defaults when there is none.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub email: String,
    pub email_verified: bool,
    pub display_name: String,
    pub profile_picture_url: Option<String>,
    pub created_at: i64,
    pub account_age_days: i64,
    pub role: String,
    pub auth_provider: Option<String>,
}

impl DashboardResponse {
    pub fn new(
        identity: &ExternalIdentity,
        local: Option<&LocalUser>,
        now: DateTime<Utc>,
    ) -> Self {
        let created_at = local.map(|u| u.created_at).unwrap_or(now);

        Self {
            email: identity.email.clone(),
            email_verified: identity.email_verified,
            display_name: identity.display_name(),
            profile_picture_url: identity.profile_picture_url.clone(),
            created_at: created_at.timestamp(),
            account_age_days: local.map(|u| u.account_age_days(now)).unwrap_or(0),
            role: local
                .map(|u| u.role)
                .unwrap_or(UserRole::User)
                .to_string(),
            auth_provider: local.map(|u| u.auth_provider.to_string()),
        }
    }
}
