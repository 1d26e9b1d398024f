use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_JWT_LEEWAY_SECS, MAX_JWT_LEEWAY_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

/// How identity assertions from the external provider are verified
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Expected `iss` claim, if any
    pub issuer: Option<String>,
    /// Expected `aud` claim, if any
    pub audience: Option<String>,
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            issuer: None,
            audience: None,
            leeway_secs: DEFAULT_JWT_LEEWAY_SECS,
        }
    }
}

// Hand-written so the secret never reaches a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_public_key_path", &self.jwt_public_key_path)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth requires either jwt_secret (HS256) or jwt_public_key_path (RS256)",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
                ));
            }
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(key_path)) => {
                let full_path = config_dir.join(key_path);
                if !full_path.is_file() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
            }
        }

        if self.leeway_secs > MAX_JWT_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be <= {}, got {}",
                MAX_JWT_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }

    /// "HS256", "RS256" or "none"
    pub fn algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
