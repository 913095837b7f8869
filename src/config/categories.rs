//! Leaderboard category catalogue

use crate::types::{Category, CategoryKind};
use serde::{Deserialize, Serialize};

/// One configured leaderboard category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub key: String,
    pub title: String,
    pub kind: CategoryKind,
}

impl CategoryConfig {
    pub fn new(key: &str, title: &str, kind: CategoryKind) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            kind,
        }
    }
}

impl From<&CategoryConfig> for Category {
    fn from(config: &CategoryConfig) -> Self {
        Category::new(config.key.clone(), config.title.clone(), config.kind)
    }
}

/// Individual leaderboards and the team table shown in the app
pub fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("goals", "Top Scorers", CategoryKind::Scalar),
        CategoryConfig::new("assists", "Top Assists", CategoryKind::Scalar),
        CategoryConfig::new("clean_sheets", "Clean Sheets", CategoryKind::Scalar),
        CategoryConfig::new("standings", "League Standings", CategoryKind::Standings),
    ]
}
