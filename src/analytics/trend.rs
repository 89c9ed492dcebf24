use serde::{Deserialize, Serialize};

use crate::models::entry::Entry;

/// Points in the recent comparison window.
const RECENT_WINDOW: usize = 7;
/// Mood-point gap between window means needed to leave "stable".
/// Fixed design constant.
const TREND_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Classifies the mood trend of a (typically timeframe-filtered) sequence.
///
/// The sequence is sorted by date internally, then split into a recent
/// window (last up-to-7 points) and an older window (everything before).
/// An empty older window contributes a mean of 0, so a short history with
/// decent recent moods reads as improving rather than declining.
pub fn classify_trend(entries: &[Entry]) -> TrendDirection {
    if entries.len() < 2 {
        return TrendDirection::Stable;
    }

    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let split = ordered.len().saturating_sub(RECENT_WINDOW);
    let (older, recent) = ordered.split_at(split);

    let recent_mean =
        recent.iter().map(|e| e.mood as f64).sum::<f64>() / recent.len() as f64;
    let older_mean =
        older.iter().map(|e| e.mood as f64).sum::<f64>() / older.len().max(1) as f64;

    if recent_mean > older_mean + TREND_THRESHOLD {
        TrendDirection::Improving
    } else if recent_mean < older_mean - TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
