mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sync_config;
mod sync_failure_policy;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sync_config::SyncConfig;
pub use sync_failure_policy::SyncFailurePolicy;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "MIRROR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".mirror";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_DATABASE_BUSY_TIMEOUT_SECS: u64 = 300;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_JWT_LEEWAY_SECS: u64 = 30;
const MAX_JWT_LEEWAY_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
