//! Static activity catalog.
//!
//! The catalog is an immutable reference dataset injected into the
//! analytics engine. [`ActivityCatalog::builtin`] ships the stock list the
//! tracker presents in its check-in form; tests and embedders can swap in
//! their own via [`ActivityCatalog::new`] or [`ActivityCatalog::from_json`].

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::activity::{Activity, Impact};

#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Builds a catalog from an arbitrary activity list. Ids must be unique.
    pub fn new(activities: Vec<Activity>) -> Result<Self> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate activity id: {}",
                    activity.id
                )));
            }
        }
        Ok(Self { activities })
    }

    /// Parses a catalog from a JSON array of activities.
    pub fn from_json(json: &str) -> Result<Self> {
        let activities: Vec<Activity> = serde_json::from_str(json)?;
        Self::new(activities)
    }

    /// The stock catalog: 34 activities across eight categories.
    pub fn builtin() -> Self {
        Self {
            activities: builtin_activities(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activities in one category, in catalog order.
    pub fn in_category(&self, category: &str) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_activities() -> Vec<Activity> {
    fn entry(
        id: &str,
        name: &str,
        impact: Impact,
        category: &str,
        description: &str,
        freshness: u8,
    ) -> Activity {
        Activity {
            id: id.into(),
            name: name.into(),
            impact,
            category: category.into(),
            description: description.into(),
            freshness,
        }
    }

    use Impact::{Negative, Neutral, Positive};

    vec![
        // Physical
        entry("1", "Exercise", Positive, "physical", "Gym, running, or any physical workout", 9),
        entry("2", "Walking", Positive, "physical", "Outdoor walk or hiking", 8),
        entry("3", "Running", Positive, "physical", "Jogging or sprinting", 9),
        entry("4", "Swimming", Positive, "physical", "Swimming or water activities", 8),
        entry("5", "Cycling", Positive, "physical", "Biking or cycling", 9),
        entry("6", "Yoga", Positive, "physical", "Yoga or stretching", 9),
        // Mental wellness
        entry("7", "Meditation", Positive, "mental", "Mindfulness or meditation practice", 9),
        entry("8", "Reading", Positive, "mental", "Reading books or articles", 8),
        entry("9", "Learning", Positive, "mental", "Studying or learning new skills", 9),
        entry("10", "Prayer", Positive, "mental", "Spiritual or religious activities", 9),
        // Social
        entry("11", "Socializing", Positive, "social", "Meeting friends or family", 8),
        entry("12", "Family Time", Positive, "social", "Quality time with family", 9),
        entry("13", "Pet Time", Positive, "social", "Playing with pets", 8),
        entry("14", "Dating", Positive, "social", "Romantic activities", 8),
        // Creative
        entry("15", "Creative Work", Positive, "creative", "Art, music, or creative projects", 9),
        entry("16", "Writing", Positive, "creative", "Journaling or creative writing", 9),
        entry("17", "Photography", Positive, "creative", "Taking photos or videos", 8),
        entry("18", "Music", Positive, "creative", "Playing or listening to music", 9),
        // Work & productivity
        entry("19", "Work", Neutral, "work", "Professional work activities", 7),
        entry("20", "Coding", Positive, "work", "Programming or technical work", 9),
        entry("21", "Meetings", Neutral, "work", "Work meetings or calls", 7),
        entry("22", "Study", Positive, "work", "Academic studying", 9),
        // Lifestyle
        entry("23", "Cooking", Positive, "lifestyle", "Cooking or meal prep", 8),
        entry("24", "Coffee", Neutral, "lifestyle", "Coffee or tea breaks", 7),
        entry("25", "Shopping", Neutral, "lifestyle", "Shopping or errands", 7),
        entry("26", "Cleaning", Positive, "lifestyle", "House cleaning or organizing", 8),
        // Entertainment
        entry("27", "Gaming", Neutral, "entertainment", "Video games or board games", 8),
        entry("28", "Movies", Neutral, "entertainment", "Watching movies or TV", 7),
        entry("29", "Social Media", Neutral, "entertainment", "Social media browsing", 7),
        entry("30", "Podcasts", Positive, "entertainment", "Listening to podcasts", 9),
        // Challenges
        entry("31", "Work Stress", Negative, "negative", "Stressful work situations", 6),
        entry("32", "Poor Sleep", Negative, "negative", "Sleep deprivation or insomnia", 5),
        entry("33", "Conflict", Negative, "negative", "Arguments or conflicts", 6),
        entry("34", "Illness", Negative, "negative", "Feeling sick or unwell", 5),
    ]
}
