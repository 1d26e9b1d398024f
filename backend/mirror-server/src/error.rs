use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures of the server process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mirror_config::ConfigError),

    #[error("User store error: {0}")]
    Store(#[from] mirror_db::StoreError),

    #[error("Identity verifier error: {0}")]
    Auth(#[from] mirror_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source} {location}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
