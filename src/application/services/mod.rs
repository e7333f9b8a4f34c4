//! Application services - Orchestration of domain logic

pub mod settings_service;

pub use settings_service::SettingsParser;
