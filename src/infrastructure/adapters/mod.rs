//! Infrastructure adapters module
//!
//! This module contains adapters for locating the settings resource.

pub mod resource;

pub use resource::{BundleLocator, InMemoryLocator, Resource, ResourceLocator, ResourceOrigin};
