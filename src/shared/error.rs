//! Error handling module
//!
//! This module provides centralized error handling for the settings loader.

use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Settings resource '{name}' not found (searched: {})", display_paths(.searched))]
    ResourceNotFound { name: String, searched: Vec<PathBuf> },

    #[error("Failed to read {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    #[error("Resource too large: {size} bytes exceeds limit of {limit} bytes")]
    ResourceTooLarge { size: u64, limit: u64 },

    #[error("Malformed settings XML in '{name}' at byte {position}: {reason}")]
    Malformed { name: String, position: u64, reason: String },

    #[error("Settings have not been loaded")]
    NotLoaded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the resource could not be located or read
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ResourceNotFound { .. } | AppError::Io { .. })
    }

    /// Whether the resource was found but could not be parsed
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, AppError::Malformed { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
