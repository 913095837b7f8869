//! Puckboard - leaderboard ranking for a hockey-union community app
//!
//! This crate ranks individual leaderboards (goals, assists, clean sheets)
//! and team standings, recomputing the full order after every add, edit or
//! delete, and provides the caller-side context and configuration around it.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod ranking;
pub mod roles;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LeaderboardError, Result, ValidationError};
pub use types::*;

// Re-export key components
pub use leaderboard::{Leaderboard, LeaderboardSnapshot, Mutation};
pub use ranking::{EntryDraft, EntryOrdering, RankingEngine, StatField};
pub use roles::{LeaderboardAccess, Role};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
