use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// What the session boundary does when reconciliation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncFailurePolicy {
    /// Log the failure and let the authenticated request continue
    #[default]
    FailOpen,
    /// Reject the request
    FailClosed,
}

impl SyncFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FailOpen => "fail_open",
            Self::FailClosed => "fail_closed",
        }
    }
}

impl FromStr for SyncFailurePolicy {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail_open" => Ok(Self::FailOpen),
            "fail_closed" => Ok(Self::FailClosed),
            _ => Err(ConfigError::sync(format!(
                "sync.failure_policy must be 'fail_open' or 'fail_closed', got '{}'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SyncFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
