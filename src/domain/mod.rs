//! Domain layer - Settings model
//!
//! This module contains the parsed settings document and the name of the
//! bundled resource it is loaded from. It has no knowledge of where the
//! bytes come from.

pub mod settings;

pub use settings::{SettingsDocument, CONFIG_FILE_NAME};
