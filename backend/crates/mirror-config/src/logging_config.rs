use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    /// Ignored when logging to a file
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Log output must stay inside the config dir
        Self::validate_relative("logging.dir", &self.dir)?;

        if let Some(ref file) = self.file {
            if file.trim().is_empty() {
                return Err(ConfigError::logging("logging.file cannot be empty"));
            }
            Self::validate_relative("logging.file", file)?;
        }

        Ok(())
    }

    #[track_caller]
    fn validate_relative(key: &str, value: &str) -> ConfigErrorResult<()> {
        if Path::new(value).is_absolute() || value.contains("..") {
            return Err(ConfigError::logging(format!(
                "{} must be relative and cannot contain '..'",
                key
            )));
        }
        Ok(())
    }
}
