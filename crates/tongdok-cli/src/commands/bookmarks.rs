use tongdok_core::storage::NewBookmark;
use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::BookmarkSubcommand;
use crate::helpers::{require_book, resolve_id};
use crate::output::{preview, print_bookmarks, records_json};
use crate::ui::{header, hint, print, receipt, short_id};

pub fn handle_bookmark(ctx: &AppContext, command: &BookmarkSubcommand) -> anyhow::Result<()> {
    match command {
        BookmarkSubcommand::Add {
            book,
            chapter,
            note,
        } => handle_add(ctx, book, *chapter, note.as_deref()),
        BookmarkSubcommand::List { json } => handle_list(ctx, *json),
        BookmarkSubcommand::Remove { id } => handle_remove(ctx, id),
    }
}

fn handle_add(
    ctx: &AppContext,
    book: &str,
    chapter: u32,
    note: Option<&str>,
) -> anyhow::Result<()> {
    let (_, book) = require_book(book, Some(chapter))?;
    let mut storage = ctx.open_storage()?;

    let mut bookmark = NewBookmark::new(book.name, chapter);
    if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
        bookmark = bookmark.with_note(note.trim());
    }
    let id = storage.add_bookmark(&bookmark)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui_ctx = ctx.ui_context(false);
    let id = short_id(&id);
    let target = format!("{} {}장", book.name, chapter);
    let note = note.map(preview).unwrap_or_else(|| "-".to_string());
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Bookmark added",
            &[("ID", id.as_str()), ("Chapter", target.as_str()), ("Note", note.as_str())],
        ),
    );
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let bookmarks = storage.list_bookmarks()?;

    let ui_ctx = ctx.ui_context(json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&bookmarks)?)?);
        return Ok(());
    }
    if bookmarks.is_empty() {
        if !ctx.quiet() {
            let text = "No bookmarks yet. Try `tongdok bookmark add 시편 23`.";
            print(&ui_ctx, &hint(&ui_ctx, text));
        }
        return Ok(());
    }
    print(&ui_ctx, &header(&ui_ctx, "bookmarks", Some(&bookmarks.len().to_string())));
    print_bookmarks(&ui_ctx, &bookmarks);
    Ok(())
}

fn handle_remove(ctx: &AppContext, input: &str) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let ids: Vec<_> = storage.list_bookmarks()?.iter().map(|b| b.id).collect();
    let id = resolve_id(input, &ids, "bookmark")?;
    storage.delete_bookmark(&id)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let id = short_id(&id);
        print(&ui_ctx, &receipt(&ui_ctx, "Bookmark removed", &[("ID", id.as_str())]));
    }
    Ok(())
}
