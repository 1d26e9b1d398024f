//! Post-authentication callback

use crate::session;
use crate::{ApiResult, AppState, CallbackResponse, UserDto, VerifiedIdentity};

use axum::{Json, extract::State};

pub const DASHBOARD_PATH: &str = "/dashboard";

/// POST /callback
///
/// Mirrors the freshly authenticated identity into the user store, then
/// sends the client to the dashboard.
pub async fn callback(
    State(state): State<AppState>,
    VerifiedIdentity(identity): VerifiedIdentity,
) -> ApiResult<Json<CallbackResponse>> {
    let user = session::sync_identity(&state.reconciler, state.sync_policy, &identity).await?;

    Ok(Json(CallbackResponse {
        redirect: DASHBOARD_PATH.to_string(),
        synced: user.is_some(),
        user: user.map(UserDto::from),
    }))
}
