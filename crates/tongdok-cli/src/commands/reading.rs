//! Daily portion and day marking.

use tongdok_core::{DailyPortion, DayStatus, StorageEngine};

use crate::app::AppContext;
use crate::cli::{MarkArgs, MarkStatus, TodayArgs, UnmarkArgs};
use crate::errors::CliError;
use crate::helpers::{date_or, require_plan};
use crate::output::{portion_json, print_portion};
use crate::ui::{hint, print, receipt};

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let plan = require_plan(&storage)?;
    let history = storage.load_history()?;
    let date = date_or(args.date.as_deref(), ctx.today()?)?;

    let portion = plan.portion_for(&history, date);
    let status = history.status(date);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let value = portion_json(&portion, date, status, plan.is_paused);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    print_portion(&ui_ctx, &portion, date, status, plan.is_paused);
    Ok(())
}

pub fn handle_mark(ctx: &AppContext, args: &MarkArgs) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let plan = require_plan(&storage)?;
    let date = date_or(args.date.as_deref(), ctx.today()?)?;

    let status = match args.status {
        MarkStatus::Success => DayStatus::Success,
        MarkStatus::Fail => DayStatus::Fail,
    };
    plan.check_mark(date, status)?;
    if date < plan.start_date {
        tracing::warn!(%date, start = %plan.start_date, "marking a day before the plan start");
    }
    storage.mark_day(date, status)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui_ctx = ctx.ui_context(false);
    let day = date.to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Day recorded",
            &[("Date", day.as_str()), ("Result", status.as_str())],
        ),
    );

    if status == DayStatus::Fail {
        let history = storage.load_history()?;
        let next = date.succ_opt().unwrap_or(date);
        if let DailyPortion::Scheduled { old, new, .. } = plan.portion_for(&history, next) {
            print(
                &ui_ctx,
                &hint(&ui_ctx, &format!("{} reads {} / {}", next, old, new)),
            );
        }
    }
    Ok(())
}

pub fn handle_unmark(ctx: &AppContext, args: &UnmarkArgs) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let date = date_or(args.date.as_deref(), ctx.today()?)?;

    if !storage.unmark_day(date)? {
        return Err(CliError::not_found(
            format!("No record for {}", date),
            "Run `tongdok stats` to see recorded days.",
        )
        .into());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let day = date.to_string();
        print(&ui_ctx, &receipt(&ui_ctx, "Record cleared", &[("Date", day.as_str())]));
    }
    Ok(())
}
