//! Daily reflections: validated import and cached display.

use chrono::NaiveDate;

use tongdok_core::reflection::{parse_reflection, ReflectionCache};
use tongdok_core::storage::SqliteStorage;

use crate::app::AppContext;
use crate::cli::ReflectionSubcommand;
use crate::errors::CliError;
use crate::helpers::{date_or, portion_label, read_input, require_plan};
use crate::output::print_reflection;
use crate::ui::{print, receipt};

pub fn handle_reflection(ctx: &AppContext, command: &ReflectionSubcommand) -> anyhow::Result<()> {
    match command {
        ReflectionSubcommand::Import {
            file,
            date,
            passage,
        } => handle_import(ctx, file.as_deref(), date.as_deref(), passage.as_deref()),
        ReflectionSubcommand::Show {
            date,
            passage,
            json,
        } => handle_show(ctx, date.as_deref(), passage.as_deref(), *json),
        ReflectionSubcommand::Clear { date, passage } => {
            handle_clear(ctx, date.as_deref(), passage.as_deref())
        }
    }
}

/// Date and passage key, defaulting to today's portion.
fn resolve_key(
    ctx: &AppContext,
    storage: &SqliteStorage,
    date: Option<&str>,
    passage: Option<&str>,
) -> anyhow::Result<(NaiveDate, String)> {
    let date = date_or(date, ctx.today()?)?;
    let passage = match passage.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.to_string(),
        None => portion_label(&require_plan(storage)?, storage, date)?,
    };
    Ok((date, passage))
}

fn handle_import(
    ctx: &AppContext,
    file: Option<&str>,
    date: Option<&str>,
    passage: Option<&str>,
) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let (date, passage) = resolve_key(ctx, &storage, date, passage)?;

    let payload = read_input(None, file, "reflection payload")?;
    let reflection = parse_reflection(&payload).map_err(|err| {
        CliError::invalid_input_with_hint(
            format!("Rejected reflection: {}", err),
            "Expected an object with title, summary, meditation, prayer and questions.",
        )
    })?;

    ReflectionCache::new(&mut storage).put(date, &passage, &reflection)?;
    tracing::info!(%date, passage = %passage, "reflection stored");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let day = date.to_string();
        let questions = reflection.questions.len().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Reflection stored",
                &[
                    ("Date", day.as_str()),
                    ("Passage", passage.as_str()),
                    ("Title", reflection.title.as_str()),
                    ("Questions", questions.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

fn handle_show(
    ctx: &AppContext,
    date: Option<&str>,
    passage: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let (date, passage) = resolve_key(ctx, &storage, date, passage)?;

    let reflection = ReflectionCache::new(&mut storage)
        .get(date, &passage)?
        .ok_or_else(|| {
            CliError::not_found(
                format!("No reflection for {} ({})", date, passage),
                "Run `tongdok reflection import <file>` to add one.",
            )
        })?;

    let ui_ctx = ctx.ui_context(json);
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "date": date,
            "passage": passage,
            "reflection": reflection,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    print_reflection(&ui_ctx, date, &passage, &reflection);
    Ok(())
}

fn handle_clear(ctx: &AppContext, date: Option<&str>, passage: Option<&str>) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let (date, passage) = resolve_key(ctx, &storage, date, passage)?;

    if !ReflectionCache::new(&mut storage).invalidate(date, &passage)? {
        return Err(CliError::not_found(
            format!("No reflection for {} ({})", date, passage),
            "Run `tongdok reflection show` to check the date and passage.",
        )
        .into());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let day = date.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Reflection removed",
                &[("Date", day.as_str()), ("Passage", passage.as_str())],
            ),
        );
    }
    Ok(())
}
