//! User-entered add/edit requests and their validation
//!
//! A draft carries the raw form values exactly as typed. Nothing is applied
//! until every required field is present and every relevant number parses.

use crate::error::ValidationError;
use crate::types::{CategoryKind, EntryId, Metric};
use crate::utils::{parse_count, parse_signed};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

/// Numeric field of an entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    Value,
    GamesPlayed,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
}

impl StatField {
    pub const ALL: [StatField; 9] = [
        StatField::Value,
        StatField::GamesPlayed,
        StatField::Wins,
        StatField::Draws,
        StatField::Losses,
        StatField::GoalsFor,
        StatField::GoalsAgainst,
        StatField::GoalDifference,
        StatField::Points,
    ];

    /// Field name as it appears in entry JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Value => "value",
            StatField::GamesPlayed => "gamesPlayed",
            StatField::Wins => "wins",
            StatField::Draws => "draws",
            StatField::Losses => "losses",
            StatField::GoalsFor => "goalsFor",
            StatField::GoalsAgainst => "goalsAgainst",
            StatField::GoalDifference => "goalDifference",
            StatField::Points => "points",
        }
    }

    /// Fields every add/edit request of this kind must supply
    pub fn required_for(kind: CategoryKind) -> &'static [StatField] {
        match kind {
            CategoryKind::Scalar => &[StatField::Value],
            CategoryKind::Standings => &[StatField::Wins, StatField::Losses, StatField::Points],
        }
    }

    /// Whether the field means anything for this kind
    pub fn applies_to(&self, kind: CategoryKind) -> bool {
        match kind {
            CategoryKind::Scalar => *self == StatField::Value,
            CategoryKind::Standings => *self != StatField::Value,
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = String;

    /// Accepts the camelCase JSON name or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "").to_lowercase();
        StatField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Add or edit request for one entry
///
/// `id` selects the entry to edit; a missing or unknown id adds a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryDraft {
    pub id: Option<EntryId>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub fields: BTreeMap<StatField, String>,
}

impl EntryDraft {
    /// Draft for a new entry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Draft editing the entry with `id`
    pub fn edit(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_field(mut self, field: StatField, raw: impl Into<String>) -> Self {
        self.fields.insert(field, raw.into());
        self
    }

    /// Trimmed display name, required and non-blank
    pub fn validated_name(&self) -> Result<String, ValidationError> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(ValidationError::MissingField {
                field: "name".to_string(),
            }),
        }
    }

    /// Raw value of a field, with blank input counting as not supplied
    fn raw(&self, field: StatField) -> Option<&str> {
        self.fields
            .get(&field)
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
    }

    fn count(&self, field: StatField) -> Result<Option<u32>, ValidationError> {
        self.raw(field)
            .map(|raw| parse_count(raw).ok_or_else(|| invalid(field, raw)))
            .transpose()
    }

    fn required_count(&self, field: StatField) -> Result<u32, ValidationError> {
        self.count(field)?.ok_or_else(|| ValidationError::MissingField {
            field: field.as_str().to_string(),
        })
    }

    fn signed(&self, field: StatField) -> Result<Option<i32>, ValidationError> {
        self.raw(field)
            .map(|raw| parse_signed(raw).ok_or_else(|| invalid(field, raw)))
            .transpose()
    }

    /// Build the metric this draft describes for `kind`
    ///
    /// For standings, fields not supplied keep their value from `prior`
    /// (or 0 for a new entry); wins, losses and points always come from the
    /// draft.
    pub fn parse_metric(
        &self,
        kind: CategoryKind,
        prior: Option<&Metric>,
    ) -> Result<Metric, ValidationError> {
        for field in self.fields.keys().filter(|field| !field.applies_to(kind)) {
            debug!("Ignoring {} field {} in draft", kind, field);
        }

        match kind {
            CategoryKind::Scalar => Ok(Metric::Scalar {
                value: Some(self.required_count(StatField::Value)?),
            }),
            CategoryKind::Standings => {
                let mut stats = prior.map(Metric::team_stats).unwrap_or_default();

                stats.wins = self.required_count(StatField::Wins)?;
                stats.losses = self.required_count(StatField::Losses)?;
                stats.points = self.required_count(StatField::Points)?;

                if let Some(games_played) = self.count(StatField::GamesPlayed)? {
                    stats.games_played = games_played;
                }
                if let Some(draws) = self.count(StatField::Draws)? {
                    stats.draws = draws;
                }
                if let Some(goals_for) = self.count(StatField::GoalsFor)? {
                    stats.goals_for = goals_for;
                }
                if let Some(goals_against) = self.count(StatField::GoalsAgainst)? {
                    stats.goals_against = goals_against;
                }
                if let Some(goal_difference) = self.signed(StatField::GoalDifference)? {
                    stats.goal_difference = goal_difference;
                }

                Ok(Metric::Standings { team_stats: stats })
            }
        }
    }
}

fn invalid(field: StatField, raw: &str) -> ValidationError {
    ValidationError::InvalidNumber {
        field: field.as_str().to_string(),
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamStats;

    #[test]
    fn test_stat_field_parse() {
        assert_eq!("goalsFor".parse::<StatField>(), Ok(StatField::GoalsFor));
        assert_eq!("goals_for".parse::<StatField>(), Ok(StatField::GoalsFor));
        assert_eq!("POINTS".parse::<StatField>(), Ok(StatField::Points));
        assert!("saves".parse::<StatField>().is_err());
    }

    #[test]
    fn test_required_fields_apply_to_kind() {
        for kind in [CategoryKind::Scalar, CategoryKind::Standings] {
            assert!(StatField::required_for(kind)
                .iter()
                .all(|field| field.applies_to(kind)));
        }
        assert_eq!(StatField::required_for(CategoryKind::Scalar), &[StatField::Value]);
        assert!(!StatField::GoalsFor.applies_to(CategoryKind::Scalar));
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            EntryDraft::default().validated_name(),
            Err(ValidationError::MissingField {
                field: "name".to_string()
            })
        );
        assert!(EntryDraft::new("   ").validated_name().is_err());
        assert_eq!(
            EntryDraft::new("  Ali Raza ").validated_name(),
            Ok("Ali Raza".to_string())
        );
    }

    #[test]
    fn test_scalar_value_required_and_numeric() {
        let missing = EntryDraft::new("Ali");
        assert_eq!(
            missing.parse_metric(CategoryKind::Scalar, None),
            Err(ValidationError::MissingField {
                field: "value".to_string()
            })
        );

        let blank = EntryDraft::new("Ali").with_field(StatField::Value, "  ");
        assert!(matches!(
            blank.parse_metric(CategoryKind::Scalar, None),
            Err(ValidationError::MissingField { .. })
        ));

        let bad = EntryDraft::new("Ali").with_field(StatField::Value, "abc");
        assert_eq!(
            bad.parse_metric(CategoryKind::Scalar, None),
            Err(ValidationError::InvalidNumber {
                field: "value".to_string(),
                value: "abc".to_string()
            })
        );

        let good = EntryDraft::new("Ali").with_field(StatField::Value, " 12 ");
        assert_eq!(
            good.parse_metric(CategoryKind::Scalar, None),
            Ok(Metric::Scalar { value: Some(12) })
        );
    }

    #[test]
    fn test_standings_requires_wins_losses_points() {
        let draft = EntryDraft::new("Lions")
            .with_field(StatField::Wins, "5")
            .with_field(StatField::Points, "15");
        assert_eq!(
            draft.parse_metric(CategoryKind::Standings, None),
            Err(ValidationError::MissingField {
                field: "losses".to_string()
            })
        );
    }

    #[test]
    fn test_standings_retains_prior_fields() {
        let prior = Metric::Standings {
            team_stats: TeamStats {
                games_played: 10,
                wins: 6,
                draws: 2,
                losses: 2,
                goals_for: 30,
                goals_against: 12,
                goal_difference: 18,
                points: 20,
            },
        };
        let draft = EntryDraft::edit("t1", "Lions")
            .with_field(StatField::Wins, "7")
            .with_field(StatField::Losses, "2")
            .with_field(StatField::Points, "23")
            .with_field(StatField::GoalsFor, "33");

        let metric = draft
            .parse_metric(CategoryKind::Standings, Some(&prior))
            .unwrap();
        assert_eq!(
            metric.team_stats(),
            TeamStats {
                games_played: 10,
                wins: 7,
                draws: 2,
                losses: 2,
                goals_for: 33,
                goals_against: 12,
                goal_difference: 18,
                points: 23,
            }
        );
    }

    #[test]
    fn test_standings_new_entry_defaults_to_zero() {
        let draft = EntryDraft::new("Kings")
            .with_field(StatField::Wins, "1")
            .with_field(StatField::Losses, "0")
            .with_field(StatField::Points, "3")
            .with_field(StatField::GoalDifference, "-2");

        let stats = draft
            .parse_metric(CategoryKind::Standings, None)
            .unwrap()
            .team_stats();
        assert_eq!(stats.points, 3);
        assert_eq!(stats.goal_difference, -2);
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.goals_for, 0);
    }

    #[test]
    fn test_standings_rejects_negative_counts() {
        let draft = EntryDraft::new("Kings")
            .with_field(StatField::Wins, "-1")
            .with_field(StatField::Losses, "0")
            .with_field(StatField::Points, "3");
        assert!(matches!(
            draft.parse_metric(CategoryKind::Standings, None),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_irrelevant_fields_ignored() {
        let draft = EntryDraft::new("Ali")
            .with_field(StatField::Value, "4")
            .with_field(StatField::Wins, "not a number");
        assert_eq!(
            draft.parse_metric(CategoryKind::Scalar, None),
            Ok(Metric::Scalar { value: Some(4) })
        );
    }

    #[test]
    fn test_draft_json() {
        let draft: EntryDraft = serde_json::from_str(
            r#"{"id":"t1","name":"Lions","fields":{"wins":"5","goalDifference":"-1"}}"#,
        )
        .unwrap();
        assert_eq!(draft.id.as_deref(), Some("t1"));
        assert_eq!(draft.fields.get(&StatField::Wins).map(String::as_str), Some("5"));
        assert_eq!(
            draft.fields.get(&StatField::GoalDifference).map(String::as_str),
            Some("-1")
        );
    }
}
