//! Leaderboard ranking
//!
//! This module provides the comparators for each category kind, validation
//! of user-entered drafts, and the engine that turns an entry collection
//! into a ranked sequence after every mutation.

pub mod draft;
pub mod engine;
pub mod ordering;

// Re-export commonly used types
pub use draft::{EntryDraft, StatField};
pub use engine::RankingEngine;
pub use ordering::{ordering_for, EntryOrdering, ScalarDescending, StandingsTable};
