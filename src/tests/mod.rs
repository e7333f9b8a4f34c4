//! Test suite for the settings loader
//!
//! Unit tests live next to the code they cover; this tree holds shared
//! fixtures and end-to-end loading scenarios against real bundle directories.

pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::path::Path;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create a configuration searching only `dirs`
    pub fn test_config(dirs: &[&Path]) -> AppConfig {
        let mut config = AppConfig::default();
        config.settings.resource_dirs = dirs.iter().map(|dir| dir.to_path_buf()).collect();
        config.settings.max_size_bytes = 4096;
        config.logging.level = "debug".to_string();
        config
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::config;

    #[test]
    fn test_config_initialization() {
        config::init();
        let dir = tempfile::tempdir().unwrap();
        let test_config = config::test_config(&[dir.path()]);
        assert_eq!(test_config.settings.resource_dirs, vec![dir.path().to_path_buf()]);
        assert_eq!(test_config.settings.max_size_bytes, 4096);
        assert!(test_config.validate_config().is_ok());
    }
}
