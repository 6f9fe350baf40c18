//! Effective day offset: how many reading days a plan has advanced by a date.
//!
//! Calendar days since the plan started count forward; paused days and days
//! marked as failed do not. A failed day therefore repeats its portion on the
//! next calendar day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::canon::Testament;
use crate::history::{DayStatus, ReadingHistory};
use crate::plan::ReadingPlan;
use crate::position::{resolve, Reading};

/// Signed number of whole days from `start` to `target`.
pub fn whole_days_between(start: NaiveDate, target: NaiveDate) -> i64 {
    (target - start).num_days()
}

/// Days with `start <= date < target` recorded as [`DayStatus::Fail`].
pub fn count_fail_days(history: &ReadingHistory, start: NaiveDate, target: NaiveDate) -> i64 {
    history
        .range(start, target)
        .filter(|(_, status)| *status == DayStatus::Fail)
        .count() as i64
}

/// Plan-relative day index for `target`. Negative before the plan starts.
pub fn effective_day_offset(
    plan: &ReadingPlan,
    history: &ReadingHistory,
    target: NaiveDate,
) -> i64 {
    whole_days_between(plan.start_date, target)
        - plan.paused_days_as_of(target)
        - count_fail_days(history, plan.start_date, target)
}

/// What a plan asks the reader to read on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyPortion {
    /// The effective offset is negative.
    NotStarted { days_until: i64 },
    Scheduled {
        day_offset: i64,
        old: Reading,
        new: Reading,
    },
}

impl DailyPortion {
    pub fn for_date(plan: &ReadingPlan, history: &ReadingHistory, date: NaiveDate) -> Self {
        let day_offset = effective_day_offset(plan, history, date);
        if day_offset < 0 {
            tracing::debug!(%date, day_offset, "date precedes plan start");
            return Self::NotStarted {
                days_until: -day_offset,
            };
        }

        let track = |testament: Testament| {
            let track = plan.track(testament);
            resolve(
                testament.books(),
                track.book,
                i64::from(track.start_chapter),
                day_offset,
                track.chapters_per_day,
            )
        };

        Self::Scheduled {
            day_offset,
            old: track(Testament::Old),
            new: track(Testament::New),
        }
    }

    /// Both tracks have read past the end of their testament.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            Self::Scheduled { old, new, .. } if old.is_completed() && new.is_completed()
        )
    }

    /// Flattened, serialisable form for JSON output.
    pub fn summary(&self, date: NaiveDate) -> PortionSummary {
        match self {
            Self::NotStarted { days_until } => PortionSummary {
                date,
                started: false,
                days_until: Some(*days_until),
                day_offset: None,
                old_testament: None,
                new_testament: None,
            },
            Self::Scheduled {
                day_offset,
                old,
                new,
            } => PortionSummary {
                date,
                started: true,
                days_until: None,
                day_offset: Some(*day_offset),
                old_testament: Some(old.to_string()),
                new_testament: Some(new.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortionSummary {
    pub date: NaiveDate,
    pub started: bool,
    pub days_until: Option<i64>,
    pub day_offset: Option<i64>,
    pub old_testament: Option<String>,
    pub new_testament: Option<String>,
}
