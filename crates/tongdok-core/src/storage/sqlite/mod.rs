//! SQLite storage backend.
//!
//! A single database file holds the plan, the per-day history, bookmarks,
//! highlights, journal entries and the key/value table used by preference
//! and cache contexts. The schema is created on first open.

mod row;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Result, TongdokError};
use crate::history::{DayStatus, ReadingHistory};
use crate::plan::ReadingPlan;
use crate::storage::traits::{KvStore, StorageEngine};
use crate::storage::types::{
    Bookmark, Highlight, JournalEntry, JournalFilter, NewBookmark, NewHighlight, NewJournalEntry,
};

use row::{parse_date, BookmarkRow, HighlightRow, JournalRow, PlanRow};

/// Schema version written to the `meta` table.
pub const FORMAT_VERSION: &str = "1";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS plan (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        ot_book TEXT NOT NULL,
        ot_start_chapter INTEGER NOT NULL CHECK (ot_start_chapter > 0),
        nt_book TEXT NOT NULL,
        nt_start_chapter INTEGER NOT NULL CHECK (nt_start_chapter > 0),
        start_date TEXT NOT NULL,
        ot_chapters_per_day INTEGER NOT NULL CHECK (ot_chapters_per_day > 0),
        nt_chapters_per_day INTEGER NOT NULL CHECK (nt_chapters_per_day > 0),
        is_paused INTEGER NOT NULL DEFAULT 0,
        paused_at TEXT,
        total_paused_days INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS history (
        date TEXT PRIMARY KEY,
        status TEXT NOT NULL CHECK (status IN ('success', 'fail')),
        updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS bookmarks (
        id TEXT PRIMARY KEY,
        book TEXT NOT NULL,
        chapter INTEGER NOT NULL CHECK (chapter > 0),
        note TEXT,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS highlights (
        id TEXT PRIMARY KEY,
        book TEXT NOT NULL,
        chapter INTEGER NOT NULL CHECK (chapter > 0),
        verse INTEGER NOT NULL CHECK (verse > 0),
        text TEXT NOT NULL,
        color TEXT NOT NULL,
        note TEXT,
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS highlights_book ON highlights (book, chapter, verse);

    CREATE TABLE IF NOT EXISTS journal_entries (
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        passage TEXT,
        body TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS journal_entries_date ON journal_entries (date);

    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
"#;

/// SQLite-backed storage engine.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<&Path>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;

        let version: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        match version.as_deref() {
            None => {
                conn.execute(
                    "INSERT INTO meta (key, value) VALUES (?, ?)",
                    ["format_version", FORMAT_VERSION],
                )?;
                conn.execute(
                    "INSERT INTO meta (key, value) VALUES (?, ?)",
                    ["created_at", &Utc::now().to_rfc3339()],
                )?;
                tracing::debug!(path = ?path, "initialized new store");
            }
            Some(FORMAT_VERSION) => {}
            Some(other) => {
                return Err(TongdokError::Storage(format!(
                    "Unsupported store format version {} (expected {})",
                    other, FORMAT_VERSION
                )));
            }
        }

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TongdokError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl StorageEngine for SqliteStorage {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn, Some(path))
    }

    fn get_plan(&self) -> Result<Option<ReadingPlan>> {
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                r#"
                SELECT ot_book, ot_start_chapter, nt_book, nt_start_chapter, start_date,
                       ot_chapters_per_day, nt_chapters_per_day, is_paused, paused_at,
                       total_paused_days
                FROM plan WHERE id = 1
                "#,
                [],
                |row| {
                    Ok(PlanRow {
                        ot_book: row.get(0)?,
                        ot_start_chapter: row.get(1)?,
                        nt_book: row.get(2)?,
                        nt_start_chapter: row.get(3)?,
                        start_date: row.get(4)?,
                        ot_chapters_per_day: row.get(5)?,
                        nt_chapters_per_day: row.get(6)?,
                        is_paused: row.get(7)?,
                        paused_at: row.get(8)?,
                        total_paused_days: row.get(9)?,
                    })
                },
            )
            .optional()?;
        row.map(ReadingPlan::try_from).transpose()
    }

    fn replace_plan(&mut self, plan: &ReadingPlan) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM plan", [])?;
        tx.execute(
            r#"
            INSERT INTO plan (id, ot_book, ot_start_chapter, nt_book, nt_start_chapter,
                              start_date, ot_chapters_per_day, nt_chapters_per_day,
                              is_paused, paused_at, total_paused_days)
            VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                plan.ot_book,
                plan.ot_start_chapter,
                plan.nt_book,
                plan.nt_start_chapter,
                plan.start_date.to_string(),
                plan.ot_chapters_per_day,
                plan.nt_chapters_per_day,
                plan.is_paused,
                plan.paused_at.map(|date| date.to_string()),
                plan.total_paused_days,
            ],
        )?;
        tx.commit()?;
        tracing::debug!(start = %plan.start_date, "plan replaced");
        Ok(())
    }

    fn delete_plan(&mut self) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM plan", [])?;
        Ok(removed > 0)
    }

    fn mark_day(&mut self, date: NaiveDate, status: DayStatus) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO history (date, status, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(date) DO UPDATE SET status = excluded.status,
                                            updated_at = excluded.updated_at
            "#,
            params![date.to_string(), status.as_str(), Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn unmark_day(&mut self, date: NaiveDate) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM history WHERE date = ?", [date.to_string()])?;
        Ok(removed > 0)
    }

    fn load_history(&self) -> Result<ReadingHistory> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare("SELECT date, status FROM history ORDER BY date")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut history = ReadingHistory::new();
        for row in rows {
            let (date, status) = row?;
            let status: DayStatus = status
                .parse()
                .map_err(|e| TongdokError::Storage(format!("Invalid history status: {}", e)))?;
            history.mark(parse_date(&date)?, status);
        }
        Ok(history)
    }

    fn add_bookmark(&mut self, bookmark: &NewBookmark) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO bookmarks (id, book, chapter, note, created_at) VALUES (?, ?, ?, ?, ?)",
            params![
                id.to_string(),
                bookmark.book,
                bookmark.chapter,
                bookmark.note,
                created_at.to_rfc3339(),
            ],
        )?;
        Ok(id)
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, book, chapter, note, created_at FROM bookmarks ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BookmarkRow {
                id: row.get(0)?,
                book: row.get(1)?,
                chapter: row.get(2)?,
                note: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut bookmarks = Vec::new();
        for row in rows {
            bookmarks.push(row?.try_into()?);
        }
        Ok(bookmarks)
    }

    fn delete_bookmark(&mut self, id: &Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM bookmarks WHERE id = ?", [id.to_string()])?;
        if removed == 0 {
            return Err(TongdokError::NotFound(format!("Bookmark {}", id)));
        }
        Ok(())
    }

    fn add_highlight(&mut self, highlight: &NewHighlight) -> Result<Uuid> {
        if highlight.text.trim().is_empty() {
            return Err(TongdokError::Validation(
                "Highlight text cannot be empty".to_string(),
            ));
        }
        let id = Uuid::new_v4();
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO highlights (id, book, chapter, verse, text, color, note, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                id.to_string(),
                highlight.book,
                highlight.chapter,
                highlight.verse,
                highlight.text,
                highlight.color.as_str(),
                highlight.note,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(id)
    }

    fn list_highlights(&self, book: Option<&str>) -> Result<Vec<Highlight>> {
        let conn = self.lock_conn()?;

        let mut query = String::from(
            "SELECT id, book, chapter, verse, text, color, note, created_at FROM highlights",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(book) = book {
            query.push_str(" WHERE book = ?");
            params.push(Box::new(book.to_string()));
        }
        query.push_str(" ORDER BY book, chapter, verse, created_at");

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok(HighlightRow {
                id: row.get(0)?,
                book: row.get(1)?,
                chapter: row.get(2)?,
                verse: row.get(3)?,
                text: row.get(4)?,
                color: row.get(5)?,
                note: row.get(6)?,
                created_at: row.get(7)?,
            })
        })?;

        let mut highlights = Vec::new();
        for row in rows {
            highlights.push(row?.try_into()?);
        }
        Ok(highlights)
    }

    fn delete_highlight(&mut self, id: &Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM highlights WHERE id = ?", [id.to_string()])?;
        if removed == 0 {
            return Err(TongdokError::NotFound(format!("Highlight {}", id)));
        }
        Ok(())
    }

    fn add_journal_entry(&mut self, entry: &NewJournalEntry) -> Result<Uuid> {
        if entry.body.trim().is_empty() {
            return Err(TongdokError::Validation(
                "Journal entry body cannot be empty".to_string(),
            ));
        }
        let id = Uuid::new_v4();
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO journal_entries (id, date, passage, body, created_at) VALUES (?, ?, ?, ?, ?)",
            params![
                id.to_string(),
                entry.date.to_string(),
                entry.passage,
                entry.body,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(id)
    }

    fn list_journal_entries(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>> {
        let conn = self.lock_conn()?;

        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(since) = filter.since {
            conditions.push("date >= ?");
            params.push(Box::new(since.to_string()));
        }
        if let Some(until) = filter.until {
            conditions.push("date <= ?");
            params.push(Box::new(until.to_string()));
        }

        let mut query =
            String::from("SELECT id, date, passage, body, created_at FROM journal_entries");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY date DESC, created_at DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok(JournalRow {
                id: row.get(0)?,
                date: row.get(1)?,
                passage: row.get(2)?,
                body: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }

    fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result != "ok" {
            return Err(TongdokError::Storage(format!(
                "SQLite integrity check failed: {}",
                result
            )));
        }

        let version: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if version.as_deref() != Some(FORMAT_VERSION) {
            return Err(TongdokError::Storage(
                "Metadata table missing or has wrong format_version".to_string(),
            ));
        }

        let plans: i64 = conn.query_row("SELECT COUNT(*) FROM plan", [], |row| row.get(0))?;
        if plans > 1 {
            return Err(TongdokError::Storage(
                "More than one reading plan stored".to_string(),
            ));
        }

        Ok(())
    }
}

impl KvStore for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock_conn()?;
        Ok(conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| row.get(0))
            .optional()?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        Ok(conn.execute("DELETE FROM kv WHERE key = ?", [key])? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanSetup;

    fn sample_plan() -> ReadingPlan {
        ReadingPlan::new(PlanSetup {
            ot_book: "창세기".to_string(),
            ot_start_chapter: 1,
            nt_book: "마태복음".to_string(),
            nt_start_chapter: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ot_chapters_per_day: 3,
            nt_chapters_per_day: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_plan_replace_is_wholesale() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.get_plan().unwrap().is_none());

        let mut plan = sample_plan();
        storage.replace_plan(&plan).unwrap();
        assert_eq!(storage.get_plan().unwrap(), Some(plan.clone()));

        plan.pause(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap())
            .unwrap();
        plan.nt_book = "요한복음".to_string();
        storage.replace_plan(&plan).unwrap();
        assert_eq!(storage.get_plan().unwrap(), Some(plan));

        storage.check_integrity().unwrap();
        assert!(storage.delete_plan().unwrap());
        assert!(!storage.delete_plan().unwrap());
    }

    #[test]
    fn test_history_upsert() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        storage.mark_day(day, DayStatus::Fail).unwrap();
        storage.mark_day(day, DayStatus::Success).unwrap();

        let history = storage.load_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.status(day), Some(DayStatus::Success));

        assert!(storage.unmark_day(day).unwrap());
        assert!(storage.load_history().unwrap().is_empty());
    }

    #[test]
    fn test_kv_store() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set("prefs.theme", "dark").unwrap();
        storage.set("prefs.theme", "sepia").unwrap();
        assert_eq!(storage.get("prefs.theme").unwrap().as_deref(), Some("sepia"));
        assert!(storage.remove("prefs.theme").unwrap());
        assert_eq!(storage.get("prefs.theme").unwrap(), None);
    }

    #[test]
    fn test_empty_journal_body_rejected() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let entry = NewJournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), "  ");
        let err = storage.add_journal_entry(&entry).unwrap_err();
        assert!(matches!(err, TongdokError::Validation(_)));
    }
}
