//! Tongdok CLI - a Bible read-through companion for the terminal
//!
//! Tracks a two-track (Old and New Testament) daily reading plan, records
//! which days were read, and keeps bookmarks, highlights, journal entries
//! and reflections in a local SQLite database.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    bookmarks, highlights, init, journal, misc, plan, reading, reflection, settings, stats,
};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    ctx.logging_config().init();

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);

        let full = format!("{}", e);
        let (message, hint) = split_error_hint(&full);
        let hint = hint.or_else(|| contextual_hint(message));

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split "message\nHint: text" into its parts.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim().to_string();
            return (&error[..idx], Some(hint));
        }
    }
    (error, None)
}

/// Hints for common failures that carry none of their own.
fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("bookmark") && error_lower.contains("not found") {
        return Some("Run `tongdok bookmark list` to see bookmark IDs.".to_string());
    }
    if error_lower.contains("highlight") && error_lower.contains("not found") {
        return Some("Run `tongdok highlight list` to see highlight IDs.".to_string());
    }
    if error_lower.contains("while the plan is paused") {
        return Some("Run `tongdok resume` first, or mark the day as success.".to_string());
    }
    if error_lower.contains("already paused") || error_lower.contains("not paused") {
        return Some("Run `tongdok plan` to see the plan state.".to_string());
    }
    if error_lower.contains("chapters per day") {
        return Some("Use --ot-per-day / --nt-per-day between 1 and 10.".to_string());
    }
    if error_lower.contains("unknown timezone") {
        return Some(
            "Set [ui] timezone in config.toml to an IANA name such as Asia/Seoul.".to_string(),
        );
    }
    if error_lower.contains("sqlite error") || error_lower.contains("format version") {
        return Some("Run `tongdok check` to inspect the database.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Today(args)) => reading::handle_today(ctx, args),
        Some(Commands::Mark(args)) => reading::handle_mark(ctx, args),
        Some(Commands::Unmark(args)) => reading::handle_unmark(ctx, args),
        Some(Commands::Pause) => plan::handle_pause(ctx),
        Some(Commands::Resume) => plan::handle_resume(ctx),
        Some(Commands::Plan(args)) => plan::handle_plan(ctx, args),
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, args),
        Some(Commands::Bookmark(command)) => bookmarks::handle_bookmark(ctx, command),
        Some(Commands::Highlight(command)) => highlights::handle_highlight(ctx, command),
        Some(Commands::Journal(command)) => journal::handle_journal(ctx, command),
        Some(Commands::Reflection(command)) => reflection::handle_reflection(ctx, command),
        Some(Commands::Settings(command)) => settings::handle_settings(ctx, command),
        Some(Commands::Books(args)) => misc::handle_books(ctx, args),
        Some(Commands::Check) => misc::handle_check(ctx),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
