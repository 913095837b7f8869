//! Entry ordering trait and the two leaderboard comparators

use crate::types::{CategoryKind, Entry};
use std::cmp::Ordering;

/// Trait for ordering entries within one category
///
/// `compare` returns `Less` when `a` belongs above `b`. Implementations must
/// return `Equal` for full ties so that a stable sort keeps input order.
pub trait EntryOrdering: Send + Sync {
    /// Category kind this ordering ranks
    fn kind(&self) -> CategoryKind;

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering;
}

/// Individual leaderboards: highest value first, missing value as 0
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarDescending;

impl EntryOrdering for ScalarDescending {
    fn kind(&self) -> CategoryKind {
        CategoryKind::Scalar
    }

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        b.metric.value().cmp(&a.metric.value())
    }
}

/// Team standings: points, then goal difference, then goals for
#[derive(Debug, Clone, Copy, Default)]
pub struct StandingsTable;

impl EntryOrdering for StandingsTable {
    fn kind(&self) -> CategoryKind {
        CategoryKind::Standings
    }

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let a = a.metric.team_stats();
        let b = b.metric.team_stats();

        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    }
}

/// Select the ordering for a category kind
pub fn ordering_for(kind: CategoryKind) -> &'static dyn EntryOrdering {
    match kind {
        CategoryKind::Scalar => &ScalarDescending,
        CategoryKind::Standings => &StandingsTable,
    }
}
