//! The analytics engine.
//!
//! Every computation here is a pure function over an immutable entry
//! snapshot plus an explicit `today` reference day; nothing is cached and
//! nothing blocks. [`AnalyticsEngine`] owns only the injected activity
//! catalog and bundles the individual metrics into a [`MoodReport`] the
//! way a presentation collaborator wants to consume them.

pub mod activities;
pub mod insights;
pub mod metrics;
pub mod timeframe;
pub mod trend;
pub mod weekday;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::catalog::ActivityCatalog;
use crate::models::entry::Entry;

pub use activities::{top_activities, ActivityStats};
pub use insights::generate_insights;
pub use metrics::{
    average_mood, current_streak, days_tracked, longest_streak, mood_distribution,
    DistributionBucket, MoodBand,
};
pub use timeframe::{filter_timeframe, Timeframe};
pub use trend::{classify_trend, TrendDirection};
pub use weekday::{weekday_patterns, WeekdayPattern};

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Everything a renderer needs in one pass over the collection.
///
/// Average mood, distribution, streaks, activity and weekday aggregates
/// cover the entire collection; `trend` and `entries_analyzed` cover the
/// requested timeframe.
#[derive(Debug, Clone, Serialize)]
pub struct MoodReport {
    pub timeframe: Timeframe,
    pub total_entries: usize,
    pub entries_analyzed: usize,
    /// Rounded to one decimal; 0.0 for an empty collection.
    pub average_mood: f64,
    pub trend: TrendDirection,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub days_tracked: usize,
    pub distribution: Vec<DistributionBucket>,
    pub top_activities: Vec<ActivityStats>,
    pub weekday_patterns: Vec<WeekdayPattern>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    catalog: ActivityCatalog,
}

impl AnalyticsEngine {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// Computes the full report for a snapshot, with `today` supplied by
    /// the caller so results are reproducible.
    pub fn report(&self, entries: &[Entry], timeframe: Timeframe, today: NaiveDate) -> MoodReport {
        let filtered = filter_timeframe(entries, timeframe, today);
        let average = average_mood(entries);
        let trend = classify_trend(&filtered);
        let top = top_activities(entries, &self.catalog);
        let insights = generate_insights(average, trend, &top);

        MoodReport {
            timeframe,
            total_entries: entries.len(),
            entries_analyzed: filtered.len(),
            average_mood: round_one_decimal(average),
            trend,
            current_streak: current_streak(entries, today),
            longest_streak: longest_streak(entries),
            days_tracked: days_tracked(entries),
            distribution: mood_distribution(entries),
            top_activities: top,
            weekday_patterns: weekday_patterns(entries),
            insights,
        }
    }

    /// [`Self::report`] anchored at the current UTC day.
    pub fn report_now(&self, entries: &[Entry], timeframe: Timeframe) -> MoodReport {
        self.report(entries, timeframe, Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::models::entry::MoodType;

    fn entry_with(date: NaiveDate, mood: i32, activities: &[&str]) -> Entry {
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
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_report_over_empty_collection_is_all_zeroes() {
        let engine = AnalyticsEngine::default();
        let report = engine.report(&[], Timeframe::Month, day(20));

        assert_eq!(report.total_entries, 0);
        assert_eq!(report.entries_analyzed, 0);
        assert_eq!(report.average_mood, 0.0);
        assert_eq!(report.trend, TrendDirection::Stable);
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.longest_streak, 0);
        assert_eq!(report.days_tracked, 0);
        assert!(report.distribution.is_empty());
        assert!(report.top_activities.is_empty());
        assert!(report.weekday_patterns.is_empty());
        // The tier rule still fires: average 0 reads as low mood.
        assert_eq!(report.insights.len(), 1);
        assert!(report.insights[0].contains("has been low"));
    }

    #[test]
    fn test_report_combines_all_metrics() {
        let engine = AnalyticsEngine::default();
        let today = day(20);
        let entries = vec![
            entry_with(day(18), 7, &["1", "7"]),
            entry_with(day(19), 8, &["1"]),
            entry_with(day(20), 9, &["1", "11"]),
            // Outside the 7-day window, still in collection-wide metrics.
            entry_with(day(1), 2, &["31"]),
        ];

        let report = engine.report(&entries, Timeframe::Week, today);

        assert_eq!(report.total_entries, 4);
        assert_eq!(report.entries_analyzed, 3);
        assert_eq!(report.average_mood, 6.5);
        assert_eq!(report.current_streak, 3);
        assert_eq!(report.longest_streak, 3);
        assert_eq!(report.days_tracked, 4);

        let counted: usize = report.distribution.iter().map(|b| b.count).sum();
        assert_eq!(counted, 4);

        assert_eq!(report.top_activities[0].activity.id, "1");
        assert_eq!(report.top_activities[0].count, 3);
        assert_eq!(report.top_activities[0].avg_mood, 8.0);

        assert!(!report.weekday_patterns.is_empty());
        assert!(!report.insights.is_empty());
    }

    #[test]
    fn test_report_is_deterministic_for_a_fixed_today() {
        let engine = AnalyticsEngine::default();
        let entries = vec![
            entry_with(day(19), 3, &["1"]),
            entry_with(day(20), 9, &["1"]),
        ];

        let a = engine.report(&entries, Timeframe::Week, day(20));
        let b = engine.report(&entries, Timeframe::Week, day(20));
        assert_eq!(a.trend, b.trend);
        assert_eq!(a.insights, b.insights);
        assert_eq!(a.average_mood, b.average_mood);
    }

    #[test]
    fn test_filtering_with_huge_window_keeps_every_entry() {
        let engine = AnalyticsEngine::default();
        let today = day(20);
        let entries: Vec<Entry> = (1..=10)
            .map(|d| entry_with(today - Duration::days(d), 5, &[]))
            .collect();

        let report = engine.report(&entries, Timeframe::All, today);
        assert_eq!(report.entries_analyzed, entries.len());
    }

    #[test]
    fn test_insight_rule_order_matches_evaluation_order() {
        let engine = AnalyticsEngine::default();
        // Average 9 and a two-point improving trend, no activity qualifying.
        let entries = vec![
            entry_with(day(19), 8, &[]),
            entry_with(day(20), 10, &[]),
        ];

        let report = engine.report(&entries, Timeframe::Week, day(20));
        assert_eq!(report.insights.len(), 2);
        assert!(report.insights[0].starts_with("Excellent!"));
        assert!(report.insights[1].starts_with("Great news!"));
    }
}
