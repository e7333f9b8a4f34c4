//! Application layer - Application services
//!
//! This module contains the service that ties resource location and
//! document parsing together into the settings loader.

pub mod services;

pub use services::*;
