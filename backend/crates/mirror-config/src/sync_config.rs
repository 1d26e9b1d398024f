use crate::SyncFailurePolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SyncConfig {
    pub failure_policy: SyncFailurePolicy,
}
