pub mod auth_provider;
pub mod external_identity;
pub mod local_user;
pub mod new_user;
pub mod user_filter;
pub mod user_patch;
pub mod user_role;
