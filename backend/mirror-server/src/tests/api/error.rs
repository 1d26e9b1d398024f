use crate::ApiError;

use mirror_auth::{AuthError, SyncError};
use mirror_db::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_expired_token_returns_401_with_code() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_missing_header_returns_401() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}

#[tokio::test]
async fn test_invalid_claim_returns_401_with_field() {
    let error = ApiError::from(AuthError::InvalidClaim {
        claim: "email".into(),
        message: "email must not be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CLAIM");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["message"], "email must not be empty");
}

#[tokio::test]
async fn test_sync_error_returns_503_without_store_details() {
    let store_error = StoreError::Initialization {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error = ApiError::from(SyncError::from(store_error));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SYNC_UNAVAILABLE");
    assert!(!json["error"]["message"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_sqlx_error_converts_to_internal() {
    let api_err: ApiError = sqlx::Error::PoolClosed.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert!(message.contains("Database"));
        }
        _ => panic!("Expected Internal error"),
    }
}
