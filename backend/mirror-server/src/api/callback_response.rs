use crate::UserDto;

use serde::Serialize;

/// Result of the post-authentication callback
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    /// Where the client goes next
    pub redirect: String,
    /// False when reconciliation failed and the fail-open policy let the login through
    pub synced: bool,
    pub user: Option<UserDto>,
}
