//! Axum extractor for the provider's identity assertion

use crate::{ApiError, AppState};

use mirror_core::ExternalIdentity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;

/// Identity carried by a verified `Authorization: Bearer <jwt>` header.
///
/// Rejects with 401 when the header is missing, malformed, or fails
/// verification.
pub struct VerifiedIdentity(pub ExternalIdentity);

impl FromRequestParts<AppState> for VerifiedIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            match state.verifier.verify_bearer(header) {
                Ok(identity) => {
                    log::debug!("Verified identity for external id {}", identity.external_id);
                    Ok(VerifiedIdentity(identity))
                }
                Err(e) => {
                    log::warn!("Rejected identity assertion: {}", e);
                    Err(ApiError::from(e))
                }
            }
        }
    }
}
