//! Application configuration structures
//!
//! This module contains the configuration structures that drive the settings loader.

use crate::domain::settings::CONFIG_FILE_NAME;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Settings loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SettingsConfig {
    /// Name of the XML resource to load
    #[validate(length(min = 5, max = 255))]
    pub file_name: String,

    /// Bundle directories searched in order
    #[validate(length(min = 1))]
    pub resource_dirs: Vec<PathBuf>,

    /// Maximum accepted resource size in bytes
    #[validate(range(min = 1024, max = 16777216))] // 1KB to 16MB
    pub max_size_bytes: u64,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            file_name: CONFIG_FILE_NAME.to_string(),
            resource_dirs: vec![PathBuf::from("resources"), PathBuf::from(".")],
            max_size_bytes: 1024 * 1024, // 1MB
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(length(min = 1))]
    pub format: String,

    /// Include target, file and line in log records
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            structured: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Settings loader configuration
    #[validate(nested)]
    pub settings: SettingsConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the optional `Settings` file and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::build(config::File::with_name("Settings").required(false))
    }

    /// Load configuration from an explicit file, still honoring environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> crate::Result<Self> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> crate::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("MYGUIDE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("settings.resource_dirs")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config
            .validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> crate::Result<()> {
        self.validate()?;
        super::validation::ConfigValidator::validate_config(self)
    }
}
