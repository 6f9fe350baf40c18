//! Plan overview and pause/resume.

use tongdok_core::StorageEngine;

use crate::app::AppContext;
use crate::cli::PlanArgs;
use crate::helpers::require_plan;
use crate::output::{plan_json, print_plan};
use crate::ui::{hint, print, receipt};

pub fn handle_plan(ctx: &AppContext, args: &PlanArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let plan = require_plan(&storage)?;
    let history = storage.load_history()?;
    let today = ctx.today()?;
    let portion = plan.portion_for(&history, today);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan_json(&plan, today, &portion))?
        );
        return Ok(());
    }
    print_plan(&ui_ctx, &plan, today, &portion);
    Ok(())
}

pub fn handle_pause(ctx: &AppContext) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let mut plan = require_plan(&storage)?;
    let today = ctx.today()?;

    plan.pause(today)?;
    storage.replace_plan(&plan)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let since = today.to_string();
        print(&ui_ctx, &receipt(&ui_ctx, "Plan paused", &[("Since", since.as_str())]));
        print(&ui_ctx, &hint(&ui_ctx, "Run `tongdok resume` to continue reading."));
    }
    Ok(())
}

pub fn handle_resume(ctx: &AppContext) -> anyhow::Result<()> {
    let mut storage = ctx.open_storage()?;
    let mut plan = require_plan(&storage)?;
    let today = ctx.today()?;

    let added = plan.resume(today)?;
    storage.replace_plan(&plan)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let added = added.to_string();
        let total = plan.total_paused_days.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Plan resumed",
                &[("Paused days", added.as_str()), ("Total paused", total.as_str())],
            ),
        );
    }
    Ok(())
}
