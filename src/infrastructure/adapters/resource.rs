//! Resource locator adapters
//!
//! These adapters find the bundled settings resource by name and hand back
//! its raw bytes. `BundleLocator` searches directories on disk and
//! `InMemoryLocator` serves bytes registered up front.

use crate::config::SettingsConfig;
use crate::shared::error::{AppError, AppResult};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Where a located resource came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOrigin {
    File(PathBuf),
    Memory,
}

impl fmt::Display for ResourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceOrigin::File(path) => write!(f, "{}", path.display()),
            ResourceOrigin::Memory => write!(f, "<memory>"),
        }
    }
}

/// A located resource and its raw contents
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: String,
    pub origin: ResourceOrigin,
    pub bytes: Bytes,
}

/// Finds named resources
pub trait ResourceLocator: Send + Sync {
    /// Locate `name` and return its contents
    fn locate(&self, name: &str) -> AppResult<Resource>;
}

/// Searches an ordered list of bundle directories; the first match wins
#[derive(Debug, Clone)]
pub struct BundleLocator {
    directories: Vec<PathBuf>,
    max_size: u64,
}

impl BundleLocator {
    pub fn new(directories: Vec<PathBuf>, max_size: u64) -> Self {
        Self { directories, max_size }
    }

    pub fn from_config(config: &SettingsConfig) -> Self {
        Self::new(config.resource_dirs.clone(), config.max_size_bytes)
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    fn check_name(name: &str) -> AppResult<()> {
        let is_relative_dir = name == "." || name == "..";
        if name.is_empty() || is_relative_dir || name.contains('/') || name.contains('\\') {
            return Err(AppError::Validation(format!(
                "Resource name must be a bare file name: '{}'",
                name
            )));
        }
        Ok(())
    }

    fn read(&self, path: PathBuf, name: &str) -> AppResult<Resource> {
        let io_error = |e: std::io::Error| AppError::Io {
            path: path.clone(),
            reason: e.to_string(),
        };

        let contents = std::fs::read(&path).map_err(io_error)?;
        let size = contents.len() as u64;
        if size > self.max_size {
            return Err(AppError::ResourceTooLarge {
                size,
                limit: self.max_size,
            });
        }

        Ok(Resource {
            name: name.to_string(),
            origin: ResourceOrigin::File(path),
            bytes: Bytes::from(contents),
        })
    }
}

impl ResourceLocator for BundleLocator {
    fn locate(&self, name: &str) -> AppResult<Resource> {
        Self::check_name(name)?;

        for directory in &self.directories {
            let candidate = directory.join(name);
            match std::fs::metadata(&candidate) {
                Ok(metadata) if metadata.is_file() => {
                    if metadata.len() > self.max_size {
                        return Err(AppError::ResourceTooLarge {
                            size: metadata.len(),
                            limit: self.max_size,
                        });
                    }
                    debug!(name = %name, path = %candidate.display(), "Found settings resource");
                    return self.read(candidate, name);
                }
                Ok(_) => {
                    debug!(path = %candidate.display(), "Skipping non-file candidate");
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %candidate.display(), "No settings resource here");
                }
                Err(e) => {
                    return Err(AppError::Io {
                        path: candidate,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(AppError::ResourceNotFound {
            name: name.to_string(),
            searched: self.directories.clone(),
        })
    }
}

/// Serves resources registered in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocator {
    resources: HashMap<String, Bytes>,
}

impl InMemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Bytes>) {
        self.resources.insert(name.into(), bytes.into());
    }
}

impl ResourceLocator for InMemoryLocator {
    fn locate(&self, name: &str) -> AppResult<Resource> {
        self.resources
            .get(name)
            .map(|bytes| Resource {
                name: name.to_string(),
                origin: ResourceOrigin::Memory,
                bytes: bytes.clone(),
            })
            .ok_or_else(|| AppError::ResourceNotFound {
                name: name.to_string(),
                searched: Vec::new(),
            })
    }
}
