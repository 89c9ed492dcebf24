use serde::Serialize;

use crate::analytics::round_one_decimal;
use crate::catalog::ActivityCatalog;
use crate::models::activity::Activity;
use crate::models::entry::Entry;

/// Ranked list length.
const TOP_ACTIVITIES_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityStats {
    pub activity: Activity,
    /// Entries referencing this activity.
    pub count: usize,
    /// Mean mood of those entries, rounded to one decimal.
    pub avg_mood: f64,
}

/// Correlates activities with mood over the full collection.
///
/// Occurrences are tallied in first-encounter order; ids the catalog does
/// not know are dropped entirely. The survivors rank descending by count
/// (stable, so ties keep encounter order) and truncate to the top 5.
pub fn top_activities(entries: &[Entry], catalog: &ActivityCatalog) -> Vec<ActivityStats> {
    let mut tallies: Vec<(String, usize, i32)> = Vec::new();
    for entry in entries {
        for id in &entry.activities {
            match tallies.iter_mut().find(|(tallied, _, _)| tallied == id.as_str()) {
                Some((_, count, mood_total)) => {
                    *count += 1;
                    *mood_total += entry.mood;
                }
                None => tallies.push((id.clone(), 1, entry.mood)),
            }
        }
    }

    let mut ranked: Vec<ActivityStats> = tallies
        .into_iter()
        .filter_map(|(id, count, mood_total)| {
            let activity = catalog.get(&id)?.clone();
            Some(ActivityStats {
                activity,
                count,
                avg_mood: round_one_decimal(mood_total as f64 / count as f64),
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_ACTIVITIES_LIMIT);
    ranked
}
