use tongdok_core::{PlanSetup, ReadingPlan, StorageEngine};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, TongdokConfig};
use crate::errors::CliError;
use crate::helpers::{date_or, require_book};
use crate::output::plan_json;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    if let Some(tz) = args.timezone.as_deref() {
        tz.parse::<chrono_tz::Tz>().map_err(|_| {
            CliError::invalid_input_with_hint(
                format!("Unknown timezone: {}", tz),
                "Use an IANA name such as Asia/Seoul.",
            )
        })?;
    }

    require_book(&args.ot_book, Some(args.ot_chapter))?;
    require_book(&args.nt_book, Some(args.nt_chapter))?;

    let start_date = date_or(args.start.as_deref(), ctx.today()?)?;
    let plan = ReadingPlan::new(PlanSetup {
        ot_book: args.ot_book.clone(),
        ot_start_chapter: args.ot_chapter,
        nt_book: args.nt_book.clone(),
        nt_start_chapter: args.nt_chapter,
        start_date,
        ot_chapters_per_day: args.ot_per_day,
        nt_chapters_per_day: args.nt_per_day,
    })?;

    let mut storage = ctx.open_storage()?;
    if storage.get_plan()?.is_some() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            "A reading plan already exists",
            "Pass --force to replace it. Reading history is kept.",
        )
        .into());
    }
    storage.replace_plan(&plan)?;
    tracing::info!(%start_date, "reading plan saved");

    let config_path = resolve_config_path()?;
    let wrote_config = if config_path.exists() {
        false
    } else {
        let db_path = ctx.db_path()?;
        write_config(
            &config_path,
            &TongdokConfig::new(&db_path, args.timezone.clone()),
        )?;
        true
    };

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let history = storage.load_history()?;
        let portion = plan.portion_for(&history, start_date);
        println!(
            "{}",
            serde_json::to_string_pretty(&plan_json(&plan, start_date, &portion))?
        );
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ot = format!(
        "{} {}장, {}/day",
        plan.ot_book, plan.ot_start_chapter, plan.ot_chapters_per_day
    );
    let nt = format!(
        "{} {}장, {}/day",
        plan.nt_book, plan.nt_start_chapter, plan.nt_chapters_per_day
    );
    let start = start_date.to_string();
    let db = ctx.db_path()?.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Reading plan created",
            &[
                ("Start", start.as_str()),
                ("Old Testament", ot.as_str()),
                ("New Testament", nt.as_str()),
                ("Database", db.as_str()),
            ],
        ),
    );
    if wrote_config {
        print(
            &ui_ctx,
            &hint(&ui_ctx, &format!("Config written to {}", config_path.display())),
        );
    }
    print(&ui_ctx, &hint(&ui_ctx, "Run `tongdok today` to see the first portion."));
    Ok(())
}
