//! Configuration management module
//!
//! This module handles loading and validating the loader's own configuration:
//! where the settings resource lives and how logging is set up.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, LoggingConfig, SettingsConfig};
pub use validation::ConfigValidator;
