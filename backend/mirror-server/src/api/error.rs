//! REST API error types
//!
//! Every error renders as `{"error": {"code", "message", "field"?}}` with a
//! matching HTTP status.

use mirror_auth::{AuthError, SyncError};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "TOKEN_EXPIRED", "SYNC_UNAVAILABLE")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Identity assertion missing or rejected (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Reconciliation failed under the fail-closed policy (503)
    #[error("Sync unavailable: {message} {location}")]
    SyncUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthorized {
                code,
                message,
                field,
                ..
            } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field,
                },
            ),
            ApiError::SyncUnavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "SYNC_UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        // Display carries source locations; clients get a fixed message
        let message = match &e {
            AuthError::TokenExpired { .. } => "Identity token has expired".to_string(),
            AuthError::MissingHeader { .. } => "Missing Authorization header".to_string(),
            AuthError::InvalidScheme { .. } => {
                "Authorization header must use the Bearer scheme".to_string()
            }
            AuthError::InvalidClaim { message, .. } => message.clone(),
            AuthError::InvalidToken { .. } | AuthError::JwtDecode { .. } => {
                "Identity token is invalid".to_string()
            }
        };

        ApiError::Unauthorized {
            code: e.error_code(),
            message,
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(_e: SyncError) -> Self {
        // Store details stay out of the response; session::apply_policy logs them
        ApiError::SyncUnavailable {
            message: "User sync is temporarily unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
