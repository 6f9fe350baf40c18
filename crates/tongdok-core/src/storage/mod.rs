//! Storage layer: traits, record types and backends.

pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteStorage;
pub use traits::{KvStore, StorageEngine};
pub use types::{
    Bookmark, Highlight, HighlightColor, JournalEntry, JournalFilter, NewBookmark, NewHighlight,
    NewJournalEntry,
};
