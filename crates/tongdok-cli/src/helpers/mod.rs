//! Input and lookup helpers for the CLI.
//!
//! - Date, month, and stdin parsing (`parsing`)
//! - Plan, book, and ID lookups against storage (`lookup`)

mod lookup;
mod parsing;

pub use lookup::{portion_label, require_book, require_plan, resolve_id, scheduled_label};
pub use parsing::{date_or, parse_date, parse_month, read_input};
