//! Identity asserted by the external provider.

use serde::{Deserialize, Serialize};

/// A verified identity handed over by the external provider.
///
/// Transient: it is supplied fresh on every callback or protected-page visit
/// and is never stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Opaque id, stable per end user at the provider
    pub external_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_verified: bool,
    pub profile_picture_url: Option<String>,
}

impl ExternalIdentity {
    pub fn new(external_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            email_verified: false,
            profile_picture_url: None,
        }
    }

    /// Human readable name, falling back to the email address.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().map(str::trim).unwrap_or("");
        let last = self.last_name.as_deref().map(str::trim).unwrap_or("");

        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{} {}", first, last),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => self.email.clone(),
        }
    }
}
