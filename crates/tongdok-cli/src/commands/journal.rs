use tongdok_core::storage::{JournalFilter, NewJournalEntry};
use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::JournalSubcommand;
use crate::constants::DEFAULT_JOURNAL_LIMIT;
use crate::errors::CliError;
use crate::helpers::{date_or, parse_date, read_input, scheduled_label};
use crate::output::{preview, print_journal, records_json};
use crate::ui::{header, hint, print, receipt, short_id};

pub fn handle_journal(ctx: &AppContext, command: &JournalSubcommand) -> anyhow::Result<()> {
    match command {
        JournalSubcommand::Add {
            body,
            date,
            passage,
        } => handle_add(ctx, body.as_deref(), date.as_deref(), passage.as_deref()),
        JournalSubcommand::List {
            since,
            until,
            limit,
            json,
        } => handle_list(ctx, since.as_deref(), until.as_deref(), *limit, *json),
    }
}

fn handle_add(
    ctx: &AppContext,
    body: Option<&str>,
    date: Option<&str>,
    passage: Option<&str>,
) -> anyhow::Result<()> {
    let date = date_or(date, ctx.today()?)?;
    let body = read_input(body, None, "journal entry")?;
    let body = body.trim();
    if body.is_empty() {
        return Err(CliError::invalid_input("Journal entry is empty").into());
    }

    let mut storage = ctx.open_storage()?;
    let passage = match passage {
        Some(p) => Some(p.trim().to_string()),
        None => match storage.get_plan()? {
            Some(plan) => scheduled_label(&plan, &storage, date)?,
            None => None,
        },
    };

    let mut entry = NewJournalEntry::new(date, body);
    if let Some(passage) = passage.as_deref().filter(|p| !p.is_empty()) {
        entry = entry.with_passage(passage);
    }
    let id = storage.add_journal_entry(&entry)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui_ctx = ctx.ui_context(false);
    let id = short_id(&id);
    let day = date.to_string();
    let passage = passage.unwrap_or_else(|| "-".to_string());
    let excerpt = preview(body);
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Journal entry saved",
            &[
                ("ID", id.as_str()),
                ("Date", day.as_str()),
                ("Passage", passage.as_str()),
                ("Entry", excerpt.as_str()),
            ],
        ),
    );
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    since: Option<&str>,
    until: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let mut filter = JournalFilter::new();
    if let Some(since) = since {
        filter = filter.since(parse_date(since)?);
    }
    if let Some(until) = until {
        filter = filter.until(parse_date(until)?);
    }
    if let Some(limit) = limit {
        filter = filter.limit(limit);
    } else if since.is_none() && until.is_none() {
        filter = filter.limit(DEFAULT_JOURNAL_LIMIT);
    }

    let storage = ctx.open_storage()?;
    let entries = storage.list_journal_entries(&filter)?;

    let ui_ctx = ctx.ui_context(json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&entries)?)?);
        return Ok(());
    }
    if entries.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &hint(&ui_ctx, "No journal entries in this range."));
        }
        return Ok(());
    }
    print(&ui_ctx, &header(&ui_ctx, "journal", None));
    print_journal(&ui_ctx, &entries);
    Ok(())
}
