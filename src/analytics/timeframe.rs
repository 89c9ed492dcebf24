use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::entry::Entry;

/// Trailing window the trend metrics are computed over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Fortnight,
    Month,
    Quarter,
    All,
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::All
    }
}

impl Timeframe {
    /// Window length in days; `None` means no cutoff.
    pub fn days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Fortnight => Some(14),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::All => None,
        }
    }

    /// Parses the UI-facing selector values ("7", "14", "30", "90", "all").
    /// Anything malformed falls back to [`Timeframe::All`] rather than
    /// erroring.
    pub fn parse(selector: &str) -> Self {
        match selector.trim() {
            "7" => Self::Week,
            "14" => Self::Fortnight,
            "30" => Self::Month,
            "90" => Self::Quarter,
            _ => Self::All,
        }
    }
}

/// Entries dated on or after `today - window`, sorted ascending by date.
/// The sort is stable, so entries sharing a date keep their relative order.
pub fn filter_timeframe(entries: &[Entry], timeframe: Timeframe, today: NaiveDate) -> Vec<Entry> {
    let mut filtered: Vec<Entry> = match timeframe.days() {
        Some(days) => {
            let cutoff = today - Duration::days(days);
            entries.iter().filter(|e| e.date >= cutoff).cloned().collect()
        }
        None => entries.to_vec(),
    };
    filtered.sort_by_key(|e| e.date);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::entry::MoodType;

    fn entry_on(date: NaiveDate, mood: i32) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            date,
            timestamp: Utc::now(),
            mood,
            mood_type: MoodType::Neutral,
            energy: 5,
            sleep: 7.0,
            stress: 5,
            journal: String::new(),
            activities: vec![],
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_known_and_malformed_selectors() {
        assert_eq!(Timeframe::parse("7"), Timeframe::Week);
        assert_eq!(Timeframe::parse("14"), Timeframe::Fortnight);
        assert_eq!(Timeframe::parse("30"), Timeframe::Month);
        assert_eq!(Timeframe::parse("90"), Timeframe::Quarter);
        assert_eq!(Timeframe::parse("all"), Timeframe::All);
        assert_eq!(Timeframe::parse("365"), Timeframe::All);
        assert_eq!(Timeframe::parse("9999"), Timeframe::All);
        assert_eq!(Timeframe::parse("garbage"), Timeframe::All);
    }

    #[test]
    fn test_filter_drops_entries_before_cutoff() {
        let today = day(2025, 6, 20);
        let entries = vec![
            entry_on(day(2025, 6, 1), 4),
            entry_on(day(2025, 6, 13), 6),
            entry_on(day(2025, 6, 19), 8),
        ];

        let filtered = filter_timeframe(&entries, Timeframe::Week, today);
        let dates: Vec<NaiveDate> = filtered.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(2025, 6, 13), day(2025, 6, 19)]);
    }

    #[test]
    fn test_filter_sorts_ascending_and_keeps_same_day_order() {
        let today = day(2025, 6, 20);
        let mut morning = entry_on(day(2025, 6, 19), 3);
        morning.journal = "morning".into();
        let mut evening = entry_on(day(2025, 6, 19), 9);
        evening.journal = "evening".into();
        let entries = vec![
            entry_on(day(2025, 6, 20), 5),
            morning,
            evening,
            entry_on(day(2025, 6, 18), 7),
        ];

        let filtered = filter_timeframe(&entries, Timeframe::Week, today);
        assert_eq!(filtered[0].date, day(2025, 6, 18));
        assert_eq!(filtered[1].journal, "morning");
        assert_eq!(filtered[2].journal, "evening");
        assert_eq!(filtered[3].date, day(2025, 6, 20));
    }

    #[test]
    fn test_window_larger_than_history_returns_everything() {
        let today = day(2025, 6, 20);
        let entries = vec![
            entry_on(day(2025, 6, 18), 5),
            entry_on(day(2025, 6, 19), 5),
        ];
        assert_eq!(filter_timeframe(&entries, Timeframe::Quarter, today).len(), 2);
        assert_eq!(filter_timeframe(&entries, Timeframe::All, today).len(), 2);
    }

    #[test]
    fn test_empty_collection_filters_to_empty() {
        assert!(filter_timeframe(&[], Timeframe::Week, day(2025, 6, 20)).is_empty());
    }
}
