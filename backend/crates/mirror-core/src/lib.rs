pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::auth_provider::AuthProvider;
pub use models::external_identity::ExternalIdentity;
pub use models::local_user::LocalUser;
pub use models::new_user::NewUser;
pub use models::user_filter::UserFilter;
pub use models::user_patch::UserPatch;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
