//! Ranking engine
//!
//! Every operation takes the full current snapshot and returns a new ranked
//! snapshot. The input slice is never modified, so a rejected mutation
//! leaves the caller's collection exactly as it was.

use crate::error::ValidationError;
use crate::ranking::draft::EntryDraft;
use crate::ranking::ordering::ordering_for;
use crate::types::{CategoryKind, Entry, EntryId};
use crate::utils::generate_entry_id;
use std::fmt;
use tracing::{debug, warn};

type IdGenerator = Box<dyn Fn() -> EntryId + Send + Sync>;

/// Stateless ranking engine for one or more categories
pub struct RankingEngine {
    id_generator: IdGenerator,
}

impl RankingEngine {
    /// Create an engine that assigns UUID v4 ids to new entries
    pub fn new() -> Self {
        Self::with_id_generator(generate_entry_id)
    }

    /// Create an engine with a custom id source for new entries
    pub fn with_id_generator<F>(id_generator: F) -> Self
    where
        F: Fn() -> EntryId + Send + Sync + 'static,
    {
        Self {
            id_generator: Box::new(id_generator),
        }
    }

    /// Sort `entries` for `kind` and assign ranks 1..=N in sorted order
    ///
    /// Ties on every key keep their input order. Entries whose metric shape
    /// does not match `kind` rank as if all their keys were 0.
    pub fn rank(&self, entries: &[Entry], kind: CategoryKind) -> Vec<Entry> {
        let mismatched = entries
            .iter()
            .filter(|entry| entry.metric.kind() != kind)
            .count();
        if mismatched > 0 {
            warn!(
                "{} of {} entries do not match category kind {}, ranking them as 0",
                mismatched,
                entries.len(),
                kind
            );
        }

        let ordering = ordering_for(kind);
        let mut ranked = entries.to_vec();
        // slice::sort_by is stable
        ranked.sort_by(|a, b| ordering.compare(a, b));

        for (index, entry) in ranked.iter_mut().enumerate() {
            entry.rank = Some(index as u32 + 1);
        }

        debug!("Ranked {} {} entries", ranked.len(), kind);
        ranked
    }

    /// Add a new entry or edit an existing one, then re-rank
    ///
    /// The draft is fully validated before anything is applied.
    pub fn upsert(
        &self,
        entries: &[Entry],
        kind: CategoryKind,
        draft: &EntryDraft,
    ) -> Result<Vec<Entry>, ValidationError> {
        let name = draft.validated_name()?;
        let existing = draft
            .id
            .as_ref()
            .and_then(|id| entries.iter().position(|entry| &entry.id == id));

        let prior = existing.map(|index| &entries[index].metric);
        let metric = draft.parse_metric(kind, prior)?;

        let mut updated = entries.to_vec();
        match existing {
            Some(index) => {
                let entry = &mut updated[index];
                debug!("Editing entry {} ({})", entry.id, name);
                entry.name = name;
                if draft.avatar.is_some() {
                    entry.avatar = draft.avatar.clone();
                }
                entry.metric = metric;
            }
            None => {
                let id = self.fresh_id(entries);
                debug!("Adding entry {} ({})", id, name);
                updated.push(Entry {
                    id,
                    name,
                    avatar: draft.avatar.clone(),
                    metric,
                    rank: None,
                });
            }
        }

        Ok(self.rank(&updated, kind))
    }

    /// Drop the entry with `id` (if present), then re-rank
    pub fn remove(&self, entries: &[Entry], kind: CategoryKind, id: &str) -> Vec<Entry> {
        let remaining: Vec<Entry> = entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();

        if remaining.len() == entries.len() {
            debug!("Remove of unknown entry {} is a no-op", id);
        }

        self.rank(&remaining, kind)
    }

    /// Next generated id not already used in `entries`
    fn fresh_id(&self, entries: &[Entry]) -> EntryId {
        loop {
            let id = (self.id_generator)();
            if !entries.iter().any(|entry| entry.id == id) {
                return id;
            }
            warn!("Generated entry id {} already in use, regenerating", id);
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankingEngine").finish_non_exhaustive()
    }
}
