pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{
    callback::{DASHBOARD_PATH, callback},
    callback_response::CallbackResponse,
    dashboard::dashboard,
    dashboard_response::DashboardResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::verified_identity::VerifiedIdentity,
    user_dto::UserDto,
};
pub use app_state::AppState;
pub use routes::build_router;
