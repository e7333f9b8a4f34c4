//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::config::app_config::LoggingConfig;
use crate::shared::error::AppError;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(config: &LoggingConfig) -> crate::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        tracing::subscriber::set_global_default(Self::build_subscriber(config, filter, std::io::stdout))
            .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Build a `fmt` subscriber for `config` writing to `writer`
    pub fn build_subscriber<W>(
        config: &LoggingConfig,
        filter: EnvFilter,
        writer: W,
    ) -> Box<dyn Subscriber + Send + Sync>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(config.structured)
            .with_file(config.structured)
            .with_line_number(config.structured)
            .with_ansi(false);

        if config.format == "json" {
            Box::new(builder.json().finish())
        } else {
            Box::new(builder.finish())
        }
    }

    /// Log a successful settings load
    pub fn log_load_success(name: &str, origin: &str, bytes: usize, entries: usize, duration_ms: u64) {
        info!(
            name = %name,
            origin = %origin,
            bytes = %bytes,
            entries = %entries,
            duration_ms = %duration_ms,
            "Settings loaded"
        );
    }

    /// Log a failed settings load
    pub fn log_load_failure(name: &str, error: &AppError, duration_ms: u64) {
        warn!(
            name = %name,
            error = %error,
            duration_ms = %duration_ms,
            "Failed to load settings"
        );
    }
}
