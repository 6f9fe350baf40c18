use chrono::Datelike;

use tongdok_core::stats::{current_streak, monthly_stats};
use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::parse_month;
use crate::output::{print_stats, stats_json};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let history = storage.load_history()?;
    let today = ctx.today()?;

    let (year, month) = match args.month.as_deref() {
        Some(value) => parse_month(value)?,
        None => (today.year(), today.month()),
    };
    let viewed = format!("{:04}-{:02}", year, month);

    let months = monthly_stats(&history, year, month);
    let streak = current_streak(&history, today);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let value = stats_json(&months, &viewed, streak);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let days: Vec<_> = history
        .iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .collect();
    print_stats(&ui_ctx, &months, &viewed, streak, &days);
    Ok(())
}
