//! Utility functions for the leaderboard engine

use crate::types::EntryId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique entry ID
pub fn generate_entry_id() -> EntryId {
    Uuid::new_v4().to_string()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a user-entered count (trimmed, non-negative)
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Parse a user-entered signed integer (trimmed)
pub fn parse_signed(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_entry_id();
        let id2 = generate_entry_id();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(&id1).is_ok());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("15"), Some(15));
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("2.5"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_signed("-5"), Some(-5));
        assert_eq!(parse_signed("+10"), Some(10));
        assert_eq!(parse_signed("ten"), None);
    }
}
