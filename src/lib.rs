//! # MindArc Analytics Core
//!
//! The computation kernel of the MindArc wellbeing tracker: turns a
//! collection of timestamped self-report entries (mood, energy, sleep,
//! stress, activities, journal text) into derived metrics — average mood,
//! trend direction, streaks, mood distribution, activity correlation,
//! weekday patterns, and generated insight sentences.
//!
//! Conventions:
//! - The engine is pure and synchronous: every metric is a function of an
//!   entry snapshot plus an explicit reference day. No caching, no locking,
//!   no I/O. Callers recompute on every collection change.
//! - Storage, transport, and rendering are external collaborators. They
//!   feed [`models::entry::Entry`] records in (via [`store::EntryStore`] or
//!   their own collections) and consume plain serializable records out.
//! - The activity catalog is injected, never hardcoded at call sites, so
//!   tests can substitute their own.
//!
//! ```
//! use mindarc_core::{AnalyticsEngine, EntryStore, Timeframe};
//! use mindarc_core::models::entry::EntryDraft;
//!
//! let mut store = EntryStore::new();
//! store.create(EntryDraft {
//!     mood: Some(8),
//!     activities: Some(vec!["7".into()]),
//!     ..Default::default()
//! })?;
//!
//! let engine = AnalyticsEngine::default();
//! let report = engine.report_now(store.entries(), Timeframe::Month);
//! assert_eq!(report.total_entries, 1);
//! # Ok::<(), mindarc_core::Error>(())
//! ```

pub mod analytics;
pub mod catalog;
pub mod error;
pub mod models;
pub mod store;

pub use analytics::{
    AnalyticsEngine, ActivityStats, DistributionBucket, MoodBand, MoodReport, Timeframe,
    TrendDirection, WeekdayPattern,
};
pub use catalog::ActivityCatalog;
pub use error::{Error, Result};
pub use store::{EntryStore, JournalStore};
