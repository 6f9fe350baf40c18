use clap::CommandFactory;
use clap_complete::Shell;

use tongdok_core::canon::Testament;
use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::{BooksArgs, Cli, TestamentArg};
use crate::output::print_books;
use crate::ui::{print, print_error};

pub fn handle_books(ctx: &AppContext, args: &BooksArgs) -> anyhow::Result<()> {
    let testaments: Vec<Testament> = match args.testament {
        Some(TestamentArg::Old) => vec![Testament::Old],
        Some(TestamentArg::New) => vec![Testament::New],
        None => vec![Testament::Old, Testament::New],
    };

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let value: Vec<serde_json::Value> = testaments
            .iter()
            .flat_map(|testament| {
                testament.books().iter().map(move |book| {
                    serde_json::json!({
                        "testament": testament,
                        "name": book.name,
                        "chapters": book.chapters,
                    })
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    print_books(&ui_ctx, &testaments);
    Ok(())
}

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let ui_ctx = ctx.ui_context(false);
    match storage.check_integrity() {
        Ok(()) => {
            if !ctx.quiet() {
                print(&ui_ctx, "Integrity check: OK");
                print(&ui_ctx, "- sqlite integrity: OK");
                print(&ui_ctx, "- format version: OK");
                print(&ui_ctx, "- plan rows: OK");
            }
            Ok(())
        }
        Err(err) => {
            print_error(
                &ui_ctx,
                &format!("Integrity check failed: {}", err),
                Some("Copy the database file aside and run `tongdok init --force`."),
            );
            Err(anyhow::anyhow!("Integrity check failed"))
        }
    }
}

pub fn handle_completions(shell: Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tongdok", &mut std::io::stdout());
    Ok(())
}
