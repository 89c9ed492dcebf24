use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::entry::DEFAULT_MOOD;

/// A long-form journal entry. Sibling dataset to the mood check-ins:
/// journal entries carry their own mood score and tag labels but do not
/// feed the mood analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: i32,
    pub tags: Vec<String>,
}

/// Input for creating or replacing a [`JournalEntry`]. Title and content
/// are required; mood defaults like a check-in draft.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JournalDraft {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    #[validate(range(min = 1, max = 10, message = "Mood must be between 1 and 10"))]
    pub mood: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl JournalDraft {
    pub(crate) fn mood_or_default(&self) -> i32 {
        self.mood.unwrap_or(DEFAULT_MOOD)
    }

    /// Trims title and content so a whitespace-only value fails the length
    /// validation instead of slipping through.
    pub(crate) fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        self
    }
}

/// Entries carrying `tag`, newest first left to the caller. The selector
/// "all" disables filtering.
pub fn filter_by_tag<'a>(entries: &'a [JournalEntry], tag: &str) -> Vec<&'a JournalEntry> {
    if tag == "all" {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| entry.tags.iter().any(|t| t == tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_entry(title: &str, tags: &[&str]) -> JournalEntry {
        let timestamp = Utc::now();
        JournalEntry {
            id: Uuid::new_v4(),
            date: timestamp.date_naive(),
            timestamp,
            title: title.into(),
            content: "content".into(),
            mood: 5,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_by_tag_matches_only_tagged_entries() {
        let entries = vec![
            journal_entry("a", &["gratitude", "health"]),
            journal_entry("b", &["work"]),
            journal_entry("c", &["gratitude"]),
        ];

        let filtered = filter_by_tag(&entries, "gratitude");
        let titles: Vec<&str> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_by_tag_all_returns_everything() {
        let entries = vec![journal_entry("a", &["work"]), journal_entry("b", &[])];
        assert_eq!(filter_by_tag(&entries, "all").len(), 2);
    }

    #[test]
    fn test_draft_requires_title_and_content() {
        let draft = JournalDraft {
            title: "".into(),
            content: "something".into(),
            mood: None,
            tags: None,
        };
        assert!(draft.validate().is_err(), "Empty title should fail validation");
    }
}
