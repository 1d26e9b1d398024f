use mirror_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

/// The user store could not be queried or written.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user row: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    NotFound { id: Uuid, location: ErrorLocation },
}

impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
