use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Defaults applied when a draft leaves a field unset.
pub const DEFAULT_MOOD: i32 = 5;
pub const DEFAULT_ENERGY: i32 = 5;
pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
pub const DEFAULT_STRESS: i32 = 5;

/// One self-reported wellbeing check-in.
///
/// Immutable once minted by the store; edits go through full replacement
/// keyed by `id`. `date` is the UTC calendar day of `timestamp`. The
/// `activities` list is deduplicated at construction and references
/// [`crate::catalog::ActivityCatalog`] ids; unknown ids are tolerated and
/// simply drop out of activity-keyed aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub mood: i32,
    pub mood_type: MoodType,
    pub energy: i32,
    pub sleep: f64,
    pub stress: i32,
    pub journal: String,
    pub activities: Vec<String>,
}

/// Fixed mood-label set. Informational only — never used in numeric
/// aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Happy,
    Excited,
    Content,
    Calm,
    Neutral,
    Tired,
    Sad,
    Anxious,
    Stressed,
    Angry,
    Frustrated,
    Guilty,
    Lonely,
    Overwhelmed,
}

impl Default for MoodType {
    fn default() -> Self {
        Self::Neutral
    }
}

impl MoodType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Excited => "Excited",
            Self::Content => "Content",
            Self::Calm => "Calm",
            Self::Neutral => "Neutral",
            Self::Tired => "Tired",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Stressed => "Stressed",
            Self::Angry => "Angry",
            Self::Frustrated => "Frustrated",
            Self::Guilty => "Guilty",
            Self::Lonely => "Lonely",
            Self::Overwhelmed => "Overwhelmed",
        }
    }
}

/// Caller-supplied fields for creating or replacing an [`Entry`].
///
/// Every field is optional; the store fills in the documented defaults and
/// rejects out-of-range values before an `Entry` exists.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EntryDraft {
    #[validate(range(min = 1, max = 10, message = "Mood must be between 1 and 10"))]
    pub mood: Option<i32>,
    pub mood_type: Option<MoodType>,
    #[validate(range(min = 1, max = 10, message = "Energy must be between 1 and 10"))]
    pub energy: Option<i32>,
    #[validate(range(min = 0.0, max = 12.0, message = "Sleep must be between 0 and 12 hours"))]
    pub sleep: Option<f64>,
    #[validate(range(min = 1, max = 10, message = "Stress must be between 1 and 10"))]
    pub stress: Option<i32>,
    pub journal: Option<String>,
    pub activities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_type_default_is_neutral() {
        assert_eq!(MoodType::default(), MoodType::Neutral);
    }

    #[test]
    fn test_draft_rejects_out_of_range_mood() {
        let draft = EntryDraft {
            mood: Some(11),
            ..Default::default()
        };
        assert!(draft.validate().is_err(), "Mood 11 should fail validation");
    }

    #[test]
    fn test_draft_accepts_boundary_values() {
        let draft = EntryDraft {
            mood: Some(1),
            energy: Some(10),
            sleep: Some(0.0),
            stress: Some(10),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        let draft = EntryDraft {
            sleep: Some(12.0),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_draft_is_valid() {
        assert!(EntryDraft::default().validate().is_ok());
    }
}
