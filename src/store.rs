//! In-memory entry collections.
//!
//! The stores own the entry lifecycle the engine itself never touches:
//! minting ids and timestamps, applying draft defaults, validating ranges,
//! full replacement by id, and irreversible deletes. Durable persistence is
//! an external collaborator's job; it hands a snapshot (`entries()`) to the
//! analytics engine and marshals the collection in and out however it likes.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::entry::{
    Entry, EntryDraft, DEFAULT_ENERGY, DEFAULT_MOOD, DEFAULT_SLEEP_HOURS, DEFAULT_STRESS,
};
use crate::models::journal::{JournalDraft, JournalEntry};

#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from an existing collection, e.g. loaded by a
    /// persistence collaborator. The caller guarantees ids are unique and
    /// numeric fields are within contract ranges.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Mints a new entry from a draft: fresh id, timestamp = now, defaults
    /// for unset fields. Rejects out-of-range values before the entry exists.
    pub fn create(&mut self, draft: EntryDraft) -> Result<Entry> {
        draft.validate()?;
        let timestamp = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            date: timestamp.date_naive(),
            timestamp,
            mood: draft.mood.unwrap_or(DEFAULT_MOOD),
            mood_type: draft.mood_type.unwrap_or_default(),
            energy: draft.energy.unwrap_or(DEFAULT_ENERGY),
            sleep: normalize_sleep(draft.sleep.unwrap_or(DEFAULT_SLEEP_HOURS)),
            stress: draft.stress.unwrap_or(DEFAULT_STRESS),
            journal: draft.journal.unwrap_or_default(),
            activities: dedupe(draft.activities.unwrap_or_default()),
        };
        tracing::debug!(entry_id = %entry.id, date = %entry.date, "check-in created");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Full replacement keyed by id. The id is stable; date and timestamp
    /// are re-stamped to now, matching the edit flow.
    pub fn replace(&mut self, id: Uuid, draft: EntryDraft) -> Result<Entry> {
        draft.validate()?;
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;

        let timestamp = Utc::now();
        *slot = Entry {
            id,
            date: timestamp.date_naive(),
            timestamp,
            mood: draft.mood.unwrap_or(DEFAULT_MOOD),
            mood_type: draft.mood_type.unwrap_or_default(),
            energy: draft.energy.unwrap_or(DEFAULT_ENERGY),
            sleep: normalize_sleep(draft.sleep.unwrap_or(DEFAULT_SLEEP_HOURS)),
            stress: draft.stress.unwrap_or(DEFAULT_STRESS),
            journal: draft.journal.unwrap_or_default(),
            activities: dedupe(draft.activities.unwrap_or_default()),
        };
        tracing::debug!(entry_id = %id, "check-in replaced");
        Ok(slot.clone())
    }

    /// Deletes by id. Irreversible; no soft-delete.
    pub fn remove(&mut self, id: Uuid) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        let removed = self.entries.remove(index);
        tracing::info!(entry_id = %id, "check-in deleted");
        Ok(removed)
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Read-only snapshot for the analytics engine.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, draft: JournalDraft) -> Result<JournalEntry> {
        let draft = draft.normalized();
        draft.validate()?;
        let timestamp = Utc::now();
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            date: timestamp.date_naive(),
            timestamp,
            mood: draft.mood_or_default(),
            title: draft.title,
            content: draft.content,
            tags: dedupe(draft.tags.unwrap_or_default()),
        };
        tracing::debug!(entry_id = %entry.id, "journal entry created");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn replace(&mut self, id: Uuid, draft: JournalDraft) -> Result<JournalEntry> {
        let draft = draft.normalized();
        draft.validate()?;
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("journal entry {id}")))?;

        let timestamp = Utc::now();
        *slot = JournalEntry {
            id,
            date: timestamp.date_naive(),
            timestamp,
            mood: draft.mood_or_default(),
            title: draft.title,
            content: draft.content,
            tags: dedupe(draft.tags.unwrap_or_default()),
        };
        tracing::debug!(entry_id = %id, "journal entry replaced");
        Ok(slot.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<JournalEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("journal entry {id}")))?;
        let removed = self.entries.remove(index);
        tracing::info!(entry_id = %id, "journal entry deleted");
        Ok(removed)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sleep is tracked at half-hour resolution.
fn normalize_sleep(hours: f64) -> f64 {
    (hours * 2.0).round() / 2.0
}

fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
