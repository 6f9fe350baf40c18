//! Raw row types for database queries.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{Result, TongdokError};
use crate::plan::ReadingPlan;
use crate::storage::types::{Bookmark, Highlight, JournalEntry};

fn parse_uuid(value: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| TongdokError::Storage(format!("Invalid {} UUID: {}", what, e)))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| TongdokError::Storage(format!("Invalid timestamp: {}", e)))?
        .with_timezone(&Utc))
}

pub(super) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| TongdokError::Storage(format!("Invalid date {}: {}", value, e)))
}

/// Raw row data from the plan table.
#[derive(Debug)]
pub struct PlanRow {
    pub ot_book: String,
    pub ot_start_chapter: u32,
    pub nt_book: String,
    pub nt_start_chapter: u32,
    pub start_date: String,
    pub ot_chapters_per_day: u32,
    pub nt_chapters_per_day: u32,
    pub is_paused: bool,
    pub paused_at: Option<String>,
    pub total_paused_days: i64,
}

impl TryFrom<PlanRow> for ReadingPlan {
    type Error = TongdokError;

    fn try_from(row: PlanRow) -> Result<Self> {
        let start_date = parse_date(&row.start_date)?;
        let paused_at = row.paused_at.as_deref().map(parse_date).transpose()?;

        Ok(ReadingPlan {
            ot_book: row.ot_book,
            ot_start_chapter: row.ot_start_chapter,
            nt_book: row.nt_book,
            nt_start_chapter: row.nt_start_chapter,
            start_date,
            ot_chapters_per_day: row.ot_chapters_per_day,
            nt_chapters_per_day: row.nt_chapters_per_day,
            is_paused: row.is_paused,
            paused_at,
            total_paused_days: row.total_paused_days,
        })
    }
}

#[derive(Debug)]
pub struct BookmarkRow {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub note: Option<String>,
    pub created_at: String,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = TongdokError;

    fn try_from(row: BookmarkRow) -> Result<Self> {
        Ok(Bookmark {
            id: parse_uuid(&row.id, "bookmark")?,
            book: row.book,
            chapter: row.chapter,
            note: row.note,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[derive(Debug)]
pub struct HighlightRow {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub color: String,
    pub note: Option<String>,
    pub created_at: String,
}

impl TryFrom<HighlightRow> for Highlight {
    type Error = TongdokError;

    fn try_from(row: HighlightRow) -> Result<Self> {
        let color = row
            .color
            .parse()
            .map_err(|e| TongdokError::Storage(format!("Invalid highlight color: {}", e)))?;
        Ok(Highlight {
            id: parse_uuid(&row.id, "highlight")?,
            book: row.book,
            chapter: row.chapter,
            verse: row.verse,
            text: row.text,
            color,
            note: row.note,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[derive(Debug)]
pub struct JournalRow {
    pub id: String,
    pub date: String,
    pub passage: Option<String>,
    pub body: String,
    pub created_at: String,
}

impl TryFrom<JournalRow> for JournalEntry {
    type Error = TongdokError;

    fn try_from(row: JournalRow) -> Result<Self> {
        Ok(JournalEntry {
            id: parse_uuid(&row.id, "journal entry")?,
            date: parse_date(&row.date)?,
            passage: row.passage,
            body: row.body,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}
