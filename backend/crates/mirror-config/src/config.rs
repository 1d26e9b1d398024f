use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig, SyncConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. MIRROR_CONFIG_DIR env var, else ./.mirror/
    /// 2. Auto-create the config directory
    /// 3. config.toml if it exists, else defaults
    /// 4. MIRROR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: MIRROR_CONFIG_DIR env var > ./.mirror/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.logging.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// `None` when HS256 is configured.
    pub fn jwt_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.auth.jwt_public_key_path {
            Some(path) => Ok(Some(Self::config_dir()?.join(path))),
            None => Ok(None),
        }
    }

    /// `None` when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn database_busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  auth: {} (issuer: {}, audience: {}, leeway: {}s)",
            self.auth.algorithm_name(),
            self.auth.issuer.as_deref().unwrap_or("any"),
            self.auth.audience.as_deref().unwrap_or("any"),
            self.auth.leeway_secs
        );
        info!("  sync: failure_policy={}", self.sync.failure_policy);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MIRROR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MIRROR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("MIRROR_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "MIRROR_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("MIRROR_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "MIRROR_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("MIRROR_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_option_string("MIRROR_AUTH_AUDIENCE", &mut self.auth.audience);

        // Sync
        Self::apply_env_parse(
            "MIRROR_SYNC_FAILURE_POLICY",
            &mut self.sync.failure_policy,
        );

        // Logging
        Self::apply_env_parse("MIRROR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MIRROR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MIRROR_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
