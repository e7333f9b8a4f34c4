//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{AppConfig, LoggingConfig, SettingsConfig};
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_settings_config(&config.settings)?;
        Self::validate_logging_config(&config.logging)?;

        Ok(())
    }

    /// Validate the settings resource name and bundle directories
    fn validate_settings_config(settings: &SettingsConfig) -> crate::Result<()> {
        Self::validate_file_name(&settings.file_name)?;

        if settings.resource_dirs.is_empty() {
            return Err(AppError::Validation(
                "At least one resource directory is required".to_string(),
            ));
        }

        if settings.resource_dirs.iter().any(|dir| dir.as_os_str().is_empty()) {
            return Err(AppError::Validation(
                "Resource directories cannot be empty paths".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate that the resource name is a bare `.xml` file name
    pub fn validate_file_name(name: &str) -> crate::Result<()> {
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(AppError::Validation(format!(
                "Settings file name must not contain path components: {}",
                name
            )));
        }

        if !name.to_ascii_lowercase().ends_with(".xml") || name.len() <= ".xml".len() {
            return Err(AppError::Validation(format!(
                "Settings file name must be an .xml file: {}",
                name
            )));
        }

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log level: {}",
                logging.level
            )));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {}",
                logging.format
            )));
        }

        Ok(())
    }
}
