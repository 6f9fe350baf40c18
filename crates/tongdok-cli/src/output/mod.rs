//! Output formatting for the CLI.
//!
//! `json` builds machine-readable values, `text` prints plain or pretty
//! output through the `ui` primitives.

mod json;
mod text;

use tongdok_core::canon::{total_chapters, Book};
use tongdok_core::Reading;

pub use json::{plan_json, portion_json, prefs_json, records_json, stats_json};
pub use text::{
    preview, print_books, print_bookmarks, print_highlights, print_journal, print_plan,
    print_portion, print_prefs, print_reflection, print_stats,
};

/// Share of `books` behind the start of `reading`, as a whole percentage.
pub fn progress_percent(reading: &Reading, books: &[Book]) -> u32 {
    let total = total_chapters(books);
    match reading {
        Reading::Completed => 100,
        Reading::DataError => 0,
        Reading::RunsPastEnd { start } | Reading::Range { start, .. } if total > 0 => {
            let done = (start.absolute(books) - 1).max(0) as u64;
            (done * 100 / total).min(100) as u32
        }
        _ => 0,
    }
}
