mod auth_provider;
mod external_identity;
mod local_user;
mod user_filter;
mod user_patch;
mod user_role;
