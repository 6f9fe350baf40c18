//! Reading-position resolver.
//!
//! Maps a plan's starting point, a day offset and a per-day chapter quota
//! onto a chapter range inside a book sequence. Chapter numbers that run
//! past the end of a book carry into the next one, the way digits carry in
//! a mixed-radix number where each book's chapter count is the base.
//!
//! The resolver never fails. Unknown book names fall back to the first book,
//! an empty sequence yields [`Reading::DataError`], and reading past the last
//! book yields [`Reading::Completed`].

use std::fmt;

use crate::canon::{find_book, Book};

/// Sentinel shown when the book sequence is empty.
pub const DATA_ERROR: &str = "데이터 오류";

/// Sentinel shown once the whole sequence has been read.
pub const COMPLETED: &str = "통독 완료";

/// Marker for a range whose end runs past the last book.
pub const END_OF_CANON: &str = "통독 끝";

/// A normalised (book, chapter) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index into the book sequence the position was resolved against.
    pub index: usize,
    pub book: &'static str,
    pub chapter: i64,
}

impl Position {
    /// Chapter number counted from the start of the sequence (1-based).
    pub fn absolute(&self, books: &[Book]) -> i64 {
        let before: i64 = books[..self.index]
            .iter()
            .map(|book| i64::from(book.chapters))
            .sum();
        before + self.chapter
    }
}

/// The resolved portion for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Book sequence was empty.
    DataError,
    /// Start position lies past the last book.
    Completed,
    /// Starts inside the sequence but the quota runs past the last book.
    RunsPastEnd { start: Position },
    /// Inclusive range; `start == end` for a single chapter.
    Range { start: Position, end: Position },
}

impl Reading {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// First chapter of the portion, if there is one.
    pub fn start(&self) -> Option<Position> {
        match self {
            Self::RunsPastEnd { start } | Self::Range { start, .. } => Some(*start),
            Self::DataError | Self::Completed => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataError => f.write_str(DATA_ERROR),
            Self::Completed => f.write_str(COMPLETED),
            Self::RunsPastEnd { start } => {
                write!(f, "{} {}장 - {}", start.book, start.chapter, END_OF_CANON)
            }
            Self::Range { start, end } if start.index == end.index => {
                if start.chapter == end.chapter {
                    write!(f, "{} {}장", start.book, start.chapter)
                } else {
                    write!(f, "{} {}-{}장", start.book, start.chapter, end.chapter)
                }
            }
            Self::Range { start, end } => write!(
                f,
                "{} {}장 - {} {}장",
                start.book, start.chapter, end.book, end.chapter
            ),
        }
    }
}

/// Carry `chapter` forward from book `index` until it fits inside a book.
///
/// Returns `None` when the carry runs off the end of the sequence.
fn normalize(books: &[Book], mut index: usize, mut chapter: i64) -> Option<Position> {
    while index < books.len() && chapter > i64::from(books[index].chapters) {
        chapter -= i64::from(books[index].chapters);
        index += 1;
    }
    books.get(index).map(|book| Position {
        index,
        book: book.name,
        chapter,
    })
}

/// Resolve the chapters read on `day_offset` of a plan.
///
/// `start_chapter` is not range-checked: values past the end of the start
/// book carry into the following books, values below 1 are left as-is.
/// Callers are expected to keep `day_offset` non-negative.
pub fn resolve(
    books: &[Book],
    start_book: &str,
    start_chapter: i64,
    day_offset: i64,
    chapters_per_day: u32,
) -> Reading {
    if books.is_empty() {
        return Reading::DataError;
    }

    let index = find_book(books, start_book).unwrap_or_else(|| {
        tracing::debug!(book = start_book, "unknown start book, using first book");
        0
    });

    let per_day = i64::from(chapters_per_day);
    let chapter = start_chapter.saturating_add(day_offset.saturating_mul(per_day));

    let Some(start) = normalize(books, index, chapter) else {
        return Reading::Completed;
    };

    if chapters_per_day <= 1 {
        return Reading::Range { start, end: start };
    }

    match normalize(books, start.index, start.chapter.saturating_add(per_day - 1)) {
        Some(end) => Reading::Range { start, end },
        None => Reading::RunsPastEnd { start },
    }
}

/// Resolve and format in one step.
pub fn describe_reading(
    books: &[Book],
    start_book: &str,
    start_chapter: i64,
    day_offset: i64,
    chapters_per_day: u32,
) -> String {
    resolve(books, start_book, start_chapter, day_offset, chapters_per_day).to_string()
}
