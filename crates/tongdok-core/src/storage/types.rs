//! Data types persisted alongside the plan and history.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TongdokError;

/// A saved chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub book: String,
    pub chapter: u32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a bookmark.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub book: String,
    pub chapter: u32,
    pub note: Option<String>,
}

impl NewBookmark {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Marker colour for a highlighted verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    #[default]
    Yellow,
    Green,
    Blue,
    Pink,
}

impl HighlightColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighlightColor {
    type Err = TongdokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "pink" => Ok(Self::Pink),
            other => Err(TongdokError::InvalidInput(format!(
                "Unknown highlight color: {} (use yellow, green, blue, pink)",
                other
            ))),
        }
    }
}

/// A highlighted verse with optional annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: Uuid,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub color: HighlightColor,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHighlight {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub color: HighlightColor,
    pub note: Option<String>,
}

/// A free-form journal entry, optionally tied to a passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub passage: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub passage: Option<String>,
    pub body: String,
}

impl NewJournalEntry {
    pub fn new(date: NaiveDate, body: impl Into<String>) -> Self {
        Self {
            date,
            passage: None,
            body: body.into(),
        }
    }

    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = Some(passage.into());
        self
    }
}

/// Filter for querying journal entries.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    /// Start date (inclusive)
    pub since: Option<NaiveDate>,

    /// End date (inclusive)
    pub until: Option<NaiveDate>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl JournalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
