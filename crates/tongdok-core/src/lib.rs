//! # Tongdok Core
//!
//! Core library for Tongdok - a Bible read-through companion that tracks a
//! daily reading plan and keeps reflections, bookmarks, highlights and
//! journal entries.
//!
//! This crate provides the domain logic, storage abstractions and data
//! models independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **canon**: Book names and chapter counts for both testaments
//! - **position**: Resolves a plan day to a chapter range
//! - **schedule**: Effective day offset (pauses and failed days)
//! - **plan** / **history**: Reading plan and per-day outcomes
//! - **stats**: Monthly achievement statistics
//! - **reflection**: Validation and caching of devotional payloads
//! - **prefs** / **state**: Reader preferences and front-end state machines
//! - **storage**: Storage engine trait and SQLite implementation

pub mod canon;
pub mod error;
pub mod history;
pub mod plan;
pub mod position;
pub mod prefs;
pub mod reflection;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod storage;

pub use error::{Result, TongdokError};
pub use history::{DayStatus, ReadingHistory};
pub use plan::{PlanSetup, ReadingPlan};
pub use position::{describe_reading, resolve, Reading};
pub use schedule::{effective_day_offset, DailyPortion};
pub use storage::{KvStore, StorageEngine};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
