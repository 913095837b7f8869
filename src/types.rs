//! Common types used throughout the leaderboard engine

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for leaderboard entries
pub type EntryId = String;

/// Which comparator a category ranks its entries with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Single value, descending (goals, assists, clean sheets)
    Scalar,
    /// Team table: points, then goal difference, then goals for
    Standings,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Scalar => write!(f, "scalar"),
            CategoryKind::Standings => write!(f, "standings"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scalar" => Ok(CategoryKind::Scalar),
            "standings" => Ok(CategoryKind::Standings),
            other => Err(format!("Unknown category kind: {}", other)),
        }
    }
}

/// Named ranking context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub title: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind,
        }
    }
}

/// Per-team standings record
///
/// Fields absent from external data deserialize to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStats {
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Usually `goals_for - goals_against`, but stored as entered
    pub goal_difference: i32,
    pub points: u32,
}

/// What an entry is ranked on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Standings {
        #[serde(rename = "teamStats")]
        team_stats: TeamStats,
    },
    Scalar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
}

impl Metric {
    /// Category kind this metric shape belongs to
    pub fn kind(&self) -> CategoryKind {
        match self {
            Metric::Scalar { .. } => CategoryKind::Scalar,
            Metric::Standings { .. } => CategoryKind::Standings,
        }
    }

    /// Scalar value, with missing values and standings records counting as 0
    pub fn value(&self) -> u32 {
        match self {
            Metric::Scalar { value } => value.unwrap_or(0),
            Metric::Standings { .. } => 0,
        }
    }

    /// Standings record, with scalar metrics counting as an all-zero record
    pub fn team_stats(&self) -> TeamStats {
        match self {
            Metric::Standings { team_stats } => *team_stats,
            Metric::Scalar { .. } => TeamStats::default(),
        }
    }
}

/// A ranked participant: a player on an individual leaderboard or a team
/// in the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub metric: Metric,
    /// 1-based position, assigned by every rank pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Entry {
    /// Create an unranked scalar entry
    pub fn scalar(id: impl Into<EntryId>, name: impl Into<String>, value: Option<u32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            metric: Metric::Scalar { value },
            rank: None,
        }
    }

    /// Create an unranked standings entry
    pub fn standings(id: impl Into<EntryId>, name: impl Into<String>, team_stats: TeamStats) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            metric: Metric::Standings { team_stats },
            rank: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Short text for the metric column of a rendered leaderboard
    pub fn metric_display(&self) -> String {
        match &self.metric {
            Metric::Scalar { value } => value.unwrap_or(0).to_string(),
            Metric::Standings { team_stats: s } => format!(
                "GP {} W {} D {} L {} GF {} GA {} GD {:+} PTS {}",
                s.games_played,
                s.wins,
                s.draws,
                s.losses,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points
            ),
        }
    }
}
