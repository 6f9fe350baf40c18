//! Storage interfaces.
//!
//! `StorageEngine` covers the structured records (plan, history, bookmarks,
//! highlights, journal). `KvStore` is the small string key/value store that
//! preference and cache context objects persist through.

use std::path::Path;

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{
    Bookmark, Highlight, JournalEntry, JournalFilter, NewBookmark, NewHighlight, NewJournalEntry,
};
use crate::error::Result;
use crate::history::{DayStatus, ReadingHistory};
use crate::plan::ReadingPlan;

/// Persistence interface for reading data.
///
/// Implementations must ensure:
/// - At most one plan exists; replacing it is atomic
/// - History marks are upserts keyed by date
/// - UUIDs are used for all other record identifiers
pub trait StorageEngine: Send + Sync {
    /// Open (creating if needed) a store at the given path.
    ///
    /// # Errors
    ///
    /// Returns `TongdokError::Storage` if the file cannot be opened or the
    /// schema cannot be created.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    // --- Plan operations ---

    /// Get the current plan, if one has been set up.
    fn get_plan(&self) -> Result<Option<ReadingPlan>>;

    /// Replace the current plan (delete + insert in one transaction).
    fn replace_plan(&mut self, plan: &ReadingPlan) -> Result<()>;

    /// Remove the plan. Returns `true` if one existed.
    fn delete_plan(&mut self) -> Result<bool>;

    // --- History operations ---

    /// Record the outcome of a day, overwriting any earlier mark.
    fn mark_day(&mut self, date: NaiveDate, status: DayStatus) -> Result<()>;

    /// Remove a day's mark. Returns `true` if the day was marked.
    fn unmark_day(&mut self, date: NaiveDate) -> Result<bool>;

    /// Load the full history.
    fn load_history(&self) -> Result<ReadingHistory>;

    // --- Bookmark operations ---

    fn add_bookmark(&mut self, bookmark: &NewBookmark) -> Result<Uuid>;

    /// Bookmarks, newest first.
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>>;

    /// # Errors
    ///
    /// Returns `TongdokError::NotFound` if no bookmark has this ID.
    fn delete_bookmark(&mut self, id: &Uuid) -> Result<()>;

    // --- Highlight operations ---

    fn add_highlight(&mut self, highlight: &NewHighlight) -> Result<Uuid>;

    /// Highlights, optionally limited to one book, in canonical verse order.
    fn list_highlights(&self, book: Option<&str>) -> Result<Vec<Highlight>>;

    /// # Errors
    ///
    /// Returns `TongdokError::NotFound` if no highlight has this ID.
    fn delete_highlight(&mut self, id: &Uuid) -> Result<()>;

    // --- Journal operations ---

    fn add_journal_entry(&mut self, entry: &NewJournalEntry) -> Result<Uuid>;

    /// Journal entries matching the filter, newest date first.
    fn list_journal_entries(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>>;

    // --- Maintenance operations ---

    /// Check store integrity.
    ///
    /// Verifies:
    /// - SQLite page integrity
    /// - Schema version matches this build
    fn check_integrity(&self) -> Result<()>;
}

/// String key/value persistence injected into preference and cache contexts.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns `true` if the key existed.
    fn remove(&mut self, key: &str) -> Result<bool>;
}
