use crate::{AuthError, Result as AuthErrorResult};

use mirror_core::ExternalIdentity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 320;

/// Claims of the identity assertion issued by the external provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (the provider's user id)
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    // `aud` is left out: it may be a string or an array, and the decoder
    // checks it against the raw payload when an audience is configured
}

impl IdentityClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (external id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.email.len() > MAX_EMAIL_LENGTH || !self.email.contains('@') {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email is not a valid address".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn into_identity(self) -> ExternalIdentity {
        ExternalIdentity {
            external_id: self.sub,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            email_verified: self.email_verified,
            profile_picture_url: self.profile_picture_url,
        }
    }
}
