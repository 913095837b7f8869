//! Test fixtures: leaderboard datasets shared by the integration tests

use puckboard::types::{Category, CategoryKind, Entry, TeamStats};

pub fn top_scorers_category() -> Category {
    Category::new("goals", "Top Scorers", CategoryKind::Scalar)
}

pub fn standings_category() -> Category {
    Category::new("standings", "League Standings", CategoryKind::Standings)
}

/// Top scorers in a shuffled order (values 15, 12, 9, 8, 7 once ranked)
pub fn top_scorers() -> Vec<Entry> {
    vec![
        Entry::scalar("p4", "Saad Khan", Some(8)).with_avatar("saad.png"),
        Entry::scalar("p1", "Ali Raza", Some(15)).with_avatar("ali.png"),
        Entry::scalar("p5", "Bilal Ahmed", Some(7)),
        Entry::scalar("p3", "Hamza Iqbal", Some(9)),
        Entry::scalar("p2", "Usman Tariq", Some(12)).with_avatar("usman.png"),
    ]
}

pub fn team_stats(
    games_played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
) -> TeamStats {
    TeamStats {
        games_played,
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        goal_difference: goals_for as i32 - goals_against as i32,
        points,
    }
}

/// League table with points 20, 15, 28, 25 in input order
pub fn league_table() -> Vec<Entry> {
    vec![
        Entry::standings("t3", "Islamabad United", team_stats(12, 6, 2, 4, 31, 25, 20)),
        Entry::standings("t4", "Quetta Gladiators", team_stats(12, 4, 3, 5, 22, 27, 15)),
        Entry::standings("t1", "Lahore Lions", team_stats(12, 9, 1, 2, 40, 18, 28)),
        Entry::standings("t2", "Karachi Kings", team_stats(12, 8, 1, 3, 35, 20, 25)),
    ]
}

pub fn ids(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.id.as_str()).collect()
}

pub fn ranks(entries: &[Entry]) -> Vec<u32> {
    entries.iter().filter_map(|entry| entry.rank).collect()
}
