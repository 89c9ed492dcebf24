use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::analytics::round_one_decimal;
use crate::models::entry::Entry;

/// Fixed English labels, Sunday-start, so results are reproducible across
/// platforms and locales.
const DAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sunday"),
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
];

#[derive(Debug, Clone, Serialize)]
pub struct WeekdayPattern {
    pub weekday: &'static str,
    pub count: usize,
    /// Mean mood on that weekday, rounded to one decimal.
    pub avg_mood: f64,
}

/// Groups the collection by weekday of `date`, reporting entry count and
/// mean mood for each weekday present, sorted descending by mean mood.
/// Ties keep Sunday-start order.
pub fn weekday_patterns(entries: &[Entry]) -> Vec<WeekdayPattern> {
    let mut patterns: Vec<(f64, WeekdayPattern)> = Vec::new();
    for (weekday, name) in DAY_NAMES {
        let moods: Vec<i32> = entries
            .iter()
            .filter(|e| e.date.weekday() == weekday)
            .map(|e| e.mood)
            .collect();
        if moods.is_empty() {
            continue;
        }
        let mean = moods.iter().sum::<i32>() as f64 / moods.len() as f64;
        patterns.push((
            mean,
            WeekdayPattern {
                weekday: name,
                count: moods.len(),
                avg_mood: round_one_decimal(mean),
            },
        ));
    }

    patterns.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    patterns.into_iter().map(|(_, pattern)| pattern).collect()
}
