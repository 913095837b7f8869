//! Community roles and what they may do with leaderboards

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role attached to a signed-in community member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Coach,
    Admin,
    Supporter,
}

/// Leaderboard permissions of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaderboardAccess {
    View,
    Manage,
}

impl Role {
    pub fn leaderboard_access(&self) -> LeaderboardAccess {
        match self {
            Role::Admin => LeaderboardAccess::Manage,
            Role::Player | Role::Coach | Role::Supporter => LeaderboardAccess::View,
        }
    }

    pub fn can_manage_leaderboards(&self) -> bool {
        self.leaderboard_access() == LeaderboardAccess::Manage
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player => write!(f, "player"),
            Role::Coach => write!(f, "coach"),
            Role::Admin => write!(f, "admin"),
            Role::Supporter => write!(f, "supporter"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "player" => Ok(Role::Player),
            "coach" => Ok(Role::Coach),
            "admin" => Ok(Role::Admin),
            "supporter" => Ok(Role::Supporter),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}
