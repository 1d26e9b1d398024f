//! Protected dashboard

use crate::session;
use crate::{ApiResult, AppState, DashboardResponse, VerifiedIdentity};

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    VerifiedIdentity(identity): VerifiedIdentity,
) -> ApiResult<Json<DashboardResponse>> {
    session::sync_identity(&state.reconciler, state.sync_policy, &identity).await?;

    let local = session::lookup_or_none(&state.reconciler, &identity.external_id).await;

    Ok(Json(DashboardResponse::new(
        &identity,
        local.as_ref(),
        Utc::now(),
    )))
}
