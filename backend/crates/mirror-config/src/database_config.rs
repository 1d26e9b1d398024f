use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
    DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_BUSY_TIMEOUT_SECS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Path must not escape the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.busy_timeout_secs > MAX_DATABASE_BUSY_TIMEOUT_SECS {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be <= {}, got {}",
                MAX_DATABASE_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
            )));
        }

        Ok(())
    }
}
