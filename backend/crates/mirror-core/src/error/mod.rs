use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid auth provider: {value} {location}")]
    InvalidAuthProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
