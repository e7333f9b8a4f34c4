//! Settings parser service
//!
//! Loads the bundled options XML through a [`ResourceLocator`], validates it
//! by parsing it into a [`SettingsDocument`], and keeps the raw bytes for
//! callers that need the document verbatim.

use crate::config::{AppConfig, ConfigValidator};
use crate::domain::settings::{SettingsDocument, CONFIG_FILE_NAME};
use crate::infrastructure::adapters::{BundleLocator, ResourceLocator, ResourceOrigin};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::debug;

/// Settings that loaded successfully
#[derive(Debug, Clone)]
struct LoadedSettings {
    raw: Bytes,
    document: SettingsDocument,
    origin: ResourceOrigin,
    loaded_at: DateTime<Utc>,
}

/// Loads and holds the application's options XML
pub struct SettingsParser {
    locator: Box<dyn ResourceLocator>,
    file_name: String,
    loaded: Option<LoadedSettings>,
}

impl SettingsParser {
    /// Create a parser that searches the configured bundle directories
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        config.validate_config()?;
        Ok(Self::with_locator(
            BundleLocator::from_config(&config.settings),
            config.settings.file_name.clone(),
        ))
    }

    /// Create a parser over any locator, loading `file_name`
    pub fn with_locator(locator: impl ResourceLocator + 'static, file_name: impl Into<String>) -> Self {
        Self {
            locator: Box::new(locator),
            file_name: file_name.into(),
            loaded: None,
        }
    }

    /// Create a parser over any locator, loading [`CONFIG_FILE_NAME`]
    pub fn with_default_name(locator: impl ResourceLocator + 'static) -> Self {
        Self::with_locator(locator, CONFIG_FILE_NAME)
    }

    /// Locate, read and parse the settings resource.
    ///
    /// On failure any previously loaded settings are discarded, so
    /// [`options_xml`](Self::options_xml) never serves stale data.
    pub fn load_settings(&mut self) -> AppResult<()> {
        let started = Instant::now();
        self.loaded = None;

        match self.load_resource() {
            Ok(loaded) => {
                LoggingUtils::log_load_success(
                    &self.file_name,
                    &loaded.origin.to_string(),
                    loaded.raw.len(),
                    loaded.document.len(),
                    started.elapsed().as_millis() as u64,
                );
                self.loaded = Some(loaded);
                Ok(())
            }
            Err(e) => {
                LoggingUtils::log_load_failure(&self.file_name, &e, started.elapsed().as_millis() as u64);
                Err(e)
            }
        }
    }

    fn load_resource(&self) -> AppResult<LoadedSettings> {
        ConfigValidator::validate_file_name(&self.file_name)?;

        debug!(name = %self.file_name, "Locating settings resource");
        let resource = self.locator.locate(&self.file_name)?;
        let document = SettingsDocument::parse(&resource.name, &resource.bytes)?;

        Ok(LoadedSettings {
            raw: resource.bytes,
            document,
            origin: resource.origin,
            loaded_at: Utc::now(),
        })
    }

    /// Raw bytes of the loaded options XML
    pub fn options_xml(&self) -> AppResult<Bytes> {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.raw.clone())
            .ok_or(AppError::NotLoaded)
    }

    /// Parsed view of the loaded options XML
    pub fn document(&self) -> AppResult<&SettingsDocument> {
        self.loaded
            .as_ref()
            .map(|loaded| &loaded.document)
            .ok_or(AppError::NotLoaded)
    }

    pub fn origin(&self) -> Option<&ResourceOrigin> {
        self.loaded.as_ref().map(|loaded| &loaded.origin)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded.as_ref().map(|loaded| loaded.loaded_at)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl std::fmt::Debug for SettingsParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsParser")
            .field("file_name", &self.file_name)
            .field("loaded", &self.loaded.is_some())
            .finish()
    }
}
