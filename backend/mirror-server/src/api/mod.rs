pub mod callback;
pub mod callback_response;
pub mod dashboard;
pub mod dashboard_response;
pub mod error;
pub mod extractors;
pub mod user_dto;
