//! UI primitives for the Tongdok CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, status marks, color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, wrap, bars)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, simple_table, table, Column,
};

pub use format::{format_datetime, short_id, single_line, truncate};
