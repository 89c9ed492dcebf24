use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::round_one_decimal;
use crate::models::entry::Entry;

/// Arithmetic mean of `mood` over the whole collection. 0.0 when empty.
pub fn average_mood(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: i32 = entries.iter().map(|e| e.mood).sum();
    total as f64 / entries.len() as f64
}

/// The five fixed mood bands, in presentation order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    Excellent,
    Good,
    Okay,
    Low,
    VeryLow,
}

impl MoodBand {
    pub const ALL: [MoodBand; 5] = [
        MoodBand::Excellent,
        MoodBand::Good,
        MoodBand::Okay,
        MoodBand::Low,
        MoodBand::VeryLow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (8-10)",
            Self::Good => "Good (6-7)",
            Self::Okay => "Okay (4-5)",
            Self::Low => "Low (2-3)",
            Self::VeryLow => "Very Low (1)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Great mood!",
            Self::Good => "Feeling good",
            Self::Okay => "Neutral mood",
            Self::Low => "Feeling down",
            Self::VeryLow => "Need support",
        }
    }

    fn contains(self, mood: i32) -> bool {
        match self {
            Self::Excellent => (8..=10).contains(&mood),
            Self::Good => (6..=7).contains(&mood),
            Self::Okay => (4..=5).contains(&mood),
            Self::Low => (2..=3).contains(&mood),
            Self::VeryLow => mood == 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionBucket {
    pub band: MoodBand,
    pub label: &'static str,
    pub count: usize,
    /// Share of the total collection, rounded to one decimal.
    pub percentage: f64,
}

/// Buckets the collection into the five mood bands. Bands with zero
/// entries are omitted, so an empty collection yields an empty vec.
pub fn mood_distribution(entries: &[Entry]) -> Vec<DistributionBucket> {
    MoodBand::ALL
        .iter()
        .filter_map(|&band| {
            let count = entries.iter().filter(|e| band.contains(e.mood)).count();
            if count == 0 {
                return None;
            }
            let percentage = round_one_decimal(count as f64 * 100.0 / entries.len() as f64);
            Some(DistributionBucket {
                band,
                label: band.label(),
                count,
                percentage,
            })
        })
        .collect()
}

/// Consecutive calendar days with at least one entry, walking backward
/// from `today`. Multiple entries on one day count once. The walk only
/// starts if the most recent entry day is today or yesterday; the first
/// gap wider than one day ends it.
pub fn current_streak(entries: &[Entry], today: NaiveDate) -> u32 {
    let mut dates = distinct_dates(entries);
    dates.reverse(); // newest first

    let Some(&latest) = dates.first() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut previous = latest;
    for &date in &dates[1..] {
        if (previous - date).num_days() == 1 {
            streak += 1;
            previous = date;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive entry days anywhere in the history.
pub fn longest_streak(entries: &[Entry]) -> u32 {
    let dates = distinct_dates(entries);

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for &date in &dates {
        run = match previous {
            Some(prev) if (date - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}

/// Number of distinct calendar days with at least one entry.
pub fn days_tracked(entries: &[Entry]) -> usize {
    distinct_dates(entries).len()
}

fn distinct_dates(entries: &[Entry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}
