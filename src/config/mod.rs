//! Configuration management for puckboard
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and the default category catalogue.

pub mod app;
pub mod categories;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, LeaderboardSettings, ServiceSettings};
pub use categories::{default_categories, CategoryConfig};
