use mirror_db::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Reconciliation failures. Always propagated to the caller; the reconciler
/// itself never retries or swallows them.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("User store failure during sync: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SyncError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store { .. } => "SYNC_UNAVAILABLE",
        }
    }
}

impl From<StoreError> for SyncError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
