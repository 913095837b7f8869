//! Main application configuration
//!
//! This module defines the configuration structures for puckboard, including
//! environment variable overrides, TOML file loading and validation.

use crate::config::categories::{default_categories, CategoryConfig};
use crate::error::LeaderboardError;
use crate::types::Category;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub leaderboards: LeaderboardSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Leaderboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Number of rows shown when no explicit limit is requested
    pub display_limit: usize,
    /// Configured categories, in display order
    pub categories: Vec<CategoryConfig>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "puckboard".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            display_limit: 10,
            categories: default_categories(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|name| env::var(name).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env_overrides(|name| env::var(name).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing sections use defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid config file: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Override settings from `lookup` (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Some(limit) = lookup("DISPLAY_LIMIT") {
            self.leaderboards.display_limit = limit
                .parse()
                .map_err(|_| anyhow!("Invalid DISPLAY_LIMIT value: {}", limit))?;
        }
        Ok(())
    }

    /// Resolve a configured category by key
    pub fn category(&self, key: &str) -> std::result::Result<Category, LeaderboardError> {
        self.leaderboards
            .categories
            .iter()
            .find(|category| category.key == key)
            .map(Category::from)
            .ok_or_else(|| LeaderboardError::CategoryNotFound {
                key: key.to_string(),
            })
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.trim().is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.leaderboards.display_limit == 0 {
        return Err(anyhow!("Display limit must be greater than 0"));
    }

    // Validate categories
    if config.leaderboards.categories.is_empty() {
        return Err(anyhow!("At least one leaderboard category is required"));
    }
    let mut seen = HashSet::new();
    for category in &config.leaderboards.categories {
        if category.key.trim().is_empty() {
            return Err(anyhow!("Category key cannot be empty"));
        }
        if category.title.trim().is_empty() {
            return Err(anyhow!("Category {} has an empty title", category.key));
        }
        if !seen.insert(category.key.as_str()) {
            return Err(anyhow!("Duplicate category key: {}", category.key));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryKind;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.name, "puckboard");
        assert_eq!(config.leaderboards.display_limit, 10);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("LOG_LEVEL", "debug"), ("DISPLAY_LIMIT", "5")]);
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.leaderboards.display_limit, 5);
        assert_eq!(config.service.name, "puckboard");
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|name| {
            (name == "DISPLAY_LIMIT").then(|| "lots".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_partial_file() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            log_level = "warn"

            [[leaderboards.categories]]
            key = "saves"
            title = "Most Saves"
            kind = "scalar"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.service.name, "puckboard");
        assert_eq!(config.leaderboards.display_limit, 10);
        assert_eq!(config.leaderboards.categories.len(), 1);
        assert_eq!(config.category("saves").unwrap().kind, CategoryKind::Scalar);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.leaderboards.display_limit = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.leaderboards.categories.clear();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config
            .leaderboards
            .categories
            .push(CategoryConfig::new("goals", "Goals again", CategoryKind::Scalar));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unknown_category() {
        let config = AppConfig::default();
        assert!(config.category("standings").is_ok());
        assert!(matches!(
            config.category("penalties"),
            Err(LeaderboardError::CategoryNotFound { .. })
        ));
    }
}
