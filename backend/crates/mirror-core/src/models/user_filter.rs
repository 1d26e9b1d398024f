use serde::{Deserialize, Serialize};

/// Exact-match filter on a single field. These are the only query shapes the
/// user store supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserFilter {
    ExternalId(String),
    Email(String),
}

impl UserFilter {
    /// Name of the filtered column
    pub fn field(&self) -> &'static str {
        match self {
            Self::ExternalId(_) => "external_id",
            Self::Email(_) => "email",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::ExternalId(value) | Self::Email(value) => value,
        }
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.field(), self.value())
    }
}
