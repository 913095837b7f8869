//! Error types for the leaderboard engine
//!
//! Ranking itself never fails. Validation of user-entered drafts is the only
//! engine-level failure; application plumbing (config, CLI, files) uses anyhow.

/// Result type alias for application-level plumbing
pub type Result<T> = anyhow::Result<T>;

/// Rejection of an add/edit request before anything is applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing info: {field} is required")]
    MissingField { field: String },

    #[error("Missing info: {field} must be a whole number, got {value:?}")]
    InvalidNumber { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidNumber { field, .. } => field,
        }
    }
}

/// Errors raised by the leaderboard context and its callers
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Role {role} cannot modify leaderboards")]
    PermissionDenied { role: String },

    #[error("Category not found: {key}")]
    CategoryNotFound { key: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
