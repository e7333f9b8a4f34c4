//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the filesystem and in-memory resource adapters.

pub mod adapters;

pub use adapters::{BundleLocator, InMemoryLocator, Resource, ResourceLocator, ResourceOrigin};
