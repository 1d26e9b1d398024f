use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which authentication paths a local user record accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    /// Record predates or is independent of the external provider
    #[default]
    Local,
    /// Authenticated exclusively through the external provider
    External,
    /// Local record that has since been linked to the external provider
    Both,
}

impl AuthProvider {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::External => "external",
            Self::Both => "both",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "local" => Ok(Self::Local),
            "external" => Ok(Self::External),
            "both" => Ok(Self::Both),
            _ => Err(CoreError::InvalidAuthProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
