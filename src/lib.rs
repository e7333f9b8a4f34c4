//! MyGuide settings - loader for the application's bundled options XML
//!
//! The loader locates the resource named [`CONFIG_FILE_NAME`] in the
//! configured bundle directories, checks that it is well-formed XML, and
//! exposes its raw bytes through [`SettingsParser::options_xml`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::SettingsParser;
pub use config::AppConfig;
pub use domain::{SettingsDocument, CONFIG_FILE_NAME};
pub use infrastructure::{BundleLocator, InMemoryLocator, ResourceLocator};
pub use shared::error::{AppError, AppResult};
pub use shared::logging::LoggingUtils;

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
