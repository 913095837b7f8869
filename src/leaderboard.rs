//! Leaderboard context
//!
//! Owns one category's current ranked snapshot and routes add/edit/delete
//! requests through the ranking engine. A rejected request leaves the
//! snapshot in its last valid state.

use crate::error::LeaderboardError;
use crate::ranking::{EntryDraft, RankingEngine};
use crate::roles::Role;
use crate::types::{Category, Entry, EntryId};
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Change requested by the display layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    Upsert(EntryDraft),
    Remove { id: EntryId },
}

/// Serializable view of a leaderboard for rendering or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    pub category: Category,
    pub entries: Vec<Entry>,
    pub generated_at: DateTime<Utc>,
}

/// Ranked entries of one category
#[derive(Debug)]
pub struct Leaderboard {
    category: Category,
    entries: Vec<Entry>,
    engine: RankingEngine,
    updated_at: DateTime<Utc>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new(category: Category) -> Self {
        Self::with_engine(category, Vec::new(), RankingEngine::new())
    }

    /// Create a leaderboard from existing entries, ranking them
    pub fn with_entries(category: Category, entries: Vec<Entry>) -> Self {
        Self::with_engine(category, entries, RankingEngine::new())
    }

    /// Create a leaderboard with a specific engine
    pub fn with_engine(category: Category, entries: Vec<Entry>, engine: RankingEngine) -> Self {
        let entries = engine.rank(&entries, category.kind);
        Self {
            category,
            entries,
            engine,
            updated_at: current_timestamp(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Current ranked entries, rank 1 first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// First `n` ranked entries
    pub fn top(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a mutation and return the new ranked entries
    pub fn apply(&mut self, mutation: Mutation) -> Result<&[Entry], LeaderboardError> {
        let kind = self.category.kind;
        let next = match &mutation {
            Mutation::Upsert(draft) => {
                match self.engine.upsert(&self.entries, kind, draft) {
                    Ok(next) => next,
                    Err(e) => {
                        warn!("Rejected change to {}: {}", self.category.key, e);
                        return Err(e.into());
                    }
                }
            }
            Mutation::Remove { id } => self.engine.remove(&self.entries, kind, id),
        };

        info!(
            "Leaderboard {} now has {} entries",
            self.category.key,
            next.len()
        );
        self.entries = next;
        self.updated_at = current_timestamp();
        Ok(&self.entries)
    }

    /// Apply a mutation on behalf of `role`, refusing roles without manage access
    pub fn apply_as(
        &mut self,
        role: Role,
        mutation: Mutation,
    ) -> Result<&[Entry], LeaderboardError> {
        if !role.can_manage_leaderboards() {
            warn!(
                "Role {} attempted to modify leaderboard {}",
                role, self.category.key
            );
            return Err(LeaderboardError::PermissionDenied {
                role: role.to_string(),
            });
        }
        self.apply(mutation)
    }

    pub fn snapshot(&self) -> LeaderboardSnapshot {
        LeaderboardSnapshot {
            category: self.category.clone(),
            entries: self.entries.clone(),
            generated_at: current_timestamp(),
        }
    }
}
