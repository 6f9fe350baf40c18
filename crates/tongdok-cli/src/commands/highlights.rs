use tongdok_core::state::{HighlightSelection, PendingHighlight};
use tongdok_core::storage::{HighlightColor, NewHighlight};
use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::{ColorArg, HighlightSubcommand};
use crate::errors::CliError;
use crate::helpers::{require_book, resolve_id};
use crate::output::{preview, print_highlights, records_json};
use crate::ui::{header, hint, print, receipt, short_id};

impl From<ColorArg> for HighlightColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Yellow => HighlightColor::Yellow,
            ColorArg::Green => HighlightColor::Green,
            ColorArg::Blue => HighlightColor::Blue,
            ColorArg::Pink => HighlightColor::Pink,
        }
    }
}

pub fn handle_highlight(ctx: &AppContext, command: &HighlightSubcommand) -> anyhow::Result<()> {
    match command {
        HighlightSubcommand::Add {
            book,
            chapter,
            verse,
            text,
            color,
            note,
        } => {
            let (_, book) = require_book(book, Some(*chapter))?;
            if *verse == 0 {
                return Err(CliError::invalid_input("Verse numbers start at 1").into());
            }
            if text.trim().is_empty() {
                return Err(CliError::invalid_input("Highlight text is empty").into());
            }

            let mut selection = HighlightSelection::default();
            selection.select(PendingHighlight {
                book: book.name.to_string(),
                chapter: *chapter,
                verse: *verse,
                text: text.trim().to_string(),
            });
            let note = note.as_deref().map(str::trim).filter(|n| !n.is_empty());
            match selection.confirm((*color).into(), note.map(str::to_string)) {
                Some(highlight) => handle_add(ctx, &highlight),
                None => Ok(()),
            }
        }
        HighlightSubcommand::List { book, json } => handle_list(ctx, book.as_deref(), *json),
        HighlightSubcommand::Remove { id } => handle_remove(ctx, id),
    }
}

fn handle_add(ctx: &AppContext, highlight: &NewHighlight) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let id = storage.add_highlight(highlight)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui_ctx = ctx.ui_context(false);
    let id = short_id(&id);
    let verse = format!("{} {}:{}", highlight.book, highlight.chapter, highlight.verse);
    let text = preview(&highlight.text);
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Highlight added",
            &[
                ("ID", id.as_str()),
                ("Verse", verse.as_str()),
                ("Color", highlight.color.as_str()),
                ("Text", text.as_str()),
            ],
        ),
    );
    Ok(())
}

fn handle_list(ctx: &AppContext, book: Option<&str>, json: bool) -> anyhow::Result<()> {
    let book = match book {
        Some(name) => Some(require_book(name, None)?.1.name),
        None => None,
    };
    let storage = ctx.open_storage()?;
    let highlights = storage.list_highlights(book)?;

    let ui_ctx = ctx.ui_context(json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&highlights)?)?);
        return Ok(());
    }
    if highlights.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &hint(&ui_ctx, "No highlights yet."));
        }
        return Ok(());
    }
    print(&ui_ctx, &header(&ui_ctx, "highlights", book));
    print_highlights(&ui_ctx, &highlights);
    Ok(())
}

fn handle_remove(ctx: &AppContext, input: &str) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let ids: Vec<_> = storage.list_highlights(None)?.iter().map(|h| h.id).collect();
    let id = resolve_id(input, &ids, "highlight")?;
    storage.delete_highlight(&id)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let id = short_id(&id);
        print(&ui_ctx, &receipt(&ui_ctx, "Highlight removed", &[("ID", id.as_str())]));
    }
    Ok(())
}
