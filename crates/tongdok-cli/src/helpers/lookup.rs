//! Lookups that turn user references into stored records.

use chrono::NaiveDate;
use uuid::Uuid;

use tongdok_core::canon::{self, Book, Testament};
use tongdok_core::storage::SqliteStorage;
use tongdok_core::{DailyPortion, ReadingPlan, StorageEngine};

use crate::errors::CliError;

/// The stored plan, or a NotFound error pointing at `tongdok init`.
pub fn require_plan(storage: &SqliteStorage) -> anyhow::Result<ReadingPlan> {
    storage.get_plan()?.ok_or_else(|| {
        CliError::not_found(
            "No reading plan found",
            "Run `tongdok init` to create one.",
        )
        .into()
    })
}

/// A canonical book by name, with the chapter checked when given.
pub fn require_book(name: &str, chapter: Option<u32>) -> anyhow::Result<(Testament, Book)> {
    let (testament, book) = canon::lookup(name).ok_or_else(|| {
        CliError::invalid_input_with_hint(
            format!("Unknown book: {}", name),
            "Run `tongdok books` to see the book names.",
        )
    })?;
    if let Some(chapter) = chapter {
        if chapter == 0 || chapter > book.chapters {
            return Err(CliError::invalid_input(format!(
                "{} has chapters 1-{}, got {}",
                book.name, book.chapters, chapter
            ))
            .into());
        }
    }
    Ok((testament, book))
}

/// Resolve a full UUID or a unique prefix of one among `ids`.
pub fn resolve_id(input: &str, ids: &[Uuid], kind: &str) -> anyhow::Result<Uuid> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CliError::invalid_input(format!("Empty {} ID", kind)).into());
    }
    if let Ok(id) = Uuid::parse_str(&needle) {
        return Ok(id);
    }

    let matches: Vec<&Uuid> = ids
        .iter()
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(**id),
        [] => Err(CliError::not_found(
            format!("No {} matches ID {}", kind, input),
            format!("Run `tongdok {} list` to see IDs.", kind),
        )
        .into()),
        _ => Err(CliError::invalid_input_with_hint(
            format!("ID prefix {} matches {} {}s", input, matches.len(), kind),
            "Use more characters of the ID.",
        )
        .into()),
    }
}

/// Both tracks' portion for `date` as one label, e.g. "창세기 1-3장 / 마태복음 1장".
///
/// `None` before the plan starts.
pub fn scheduled_label(
    plan: &ReadingPlan,
    storage: &SqliteStorage,
    date: NaiveDate,
) -> anyhow::Result<Option<String>> {
    let history = storage.load_history()?;
    Ok(match plan.portion_for(&history, date) {
        DailyPortion::Scheduled { old, new, .. } => Some(format!("{} / {}", old, new)),
        DailyPortion::NotStarted { .. } => None,
    })
}

/// Like [`scheduled_label`], but a date before the plan start is an error.
pub fn portion_label(
    plan: &ReadingPlan,
    storage: &SqliteStorage,
    date: NaiveDate,
) -> anyhow::Result<String> {
    scheduled_label(plan, storage, date)?.ok_or_else(|| {
        CliError::invalid_input_with_hint(
            format!("The plan has not started on {}", date),
            "Pass --passage explicitly.",
        )
        .into()
    })
}
