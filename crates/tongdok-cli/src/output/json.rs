//! JSON output for plans, portions, and stored records.

use chrono::NaiveDate;
use serde::Serialize;

use tongdok_core::canon::Testament;
use tongdok_core::prefs::Preferences;
use tongdok_core::stats::MonthlyStats;
use tongdok_core::{DailyPortion, DayStatus, ReadingPlan};

use super::progress_percent;

pub fn portion_json(
    portion: &DailyPortion,
    date: NaiveDate,
    status: Option<DayStatus>,
    paused: bool,
) -> serde_json::Value {
    serde_json::json!({
        "portion": portion.summary(date),
        "finished": portion.is_finished(),
        "status": status,
        "paused": paused,
    })
}

pub fn plan_json(
    plan: &ReadingPlan,
    today: NaiveDate,
    portion: &DailyPortion,
) -> serde_json::Value {
    let (ot_progress, nt_progress) = match portion {
        DailyPortion::Scheduled { old, new, .. } => (
            progress_percent(old, Testament::Old.books()),
            progress_percent(new, Testament::New.books()),
        ),
        DailyPortion::NotStarted { .. } => (0, 0),
    };
    serde_json::json!({
        "plan": plan,
        "today": portion.summary(today),
        "paused_days": plan.paused_days_as_of(today),
        "progress": {
            "old_testament": ot_progress,
            "new_testament": nt_progress,
        },
    })
}

pub fn stats_json(months: &[MonthlyStats], viewed: &str, streak: u32) -> serde_json::Value {
    serde_json::json!({
        "month": viewed,
        "streak": streak,
        "months": months,
    })
}

pub fn prefs_json(prefs: &Preferences) -> serde_json::Value {
    serde_json::json!({
        "theme": prefs.theme,
        "font_size": prefs.font_size,
    })
}

/// JSON array of stored records.
pub fn records_json<T: Serialize>(records: &[T]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(records)?)
}
