//! Monthly achievement statistics over the reading history.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::history::{DayStatus, ReadingHistory};

/// Success/fail counts for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStats {
    pub month: String,
    pub success: u32,
    pub fail: u32,
    pub total: u32,
    /// Percentage of successful days, rounded half up; 0 for an empty month.
    pub rate: u32,
}

fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

fn success_rate(success: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (success * 200 + total) / (2 * total)
}

/// Statistics for every month present in `history` plus the viewed month,
/// in ascending order.
pub fn monthly_stats(history: &ReadingHistory, year: i32, month: u32) -> Vec<MonthlyStats> {
    let mut months: BTreeSet<String> = history
        .iter()
        .map(|(date, _)| month_key(date.year(), date.month()))
        .collect();
    months.insert(month_key(year, month));

    months
        .into_iter()
        .map(|key| {
            let (mut success, mut fail) = (0, 0);
            for (date, status) in history.iter() {
                if month_key(date.year(), date.month()) != key {
                    continue;
                }
                match status {
                    DayStatus::Success => success += 1,
                    DayStatus::Fail => fail += 1,
                }
            }
            let total = success + fail;
            MonthlyStats {
                month: key,
                success,
                fail,
                total,
                rate: success_rate(success, total),
            }
        })
        .collect()
}

/// Consecutive successful days ending today, or yesterday if today is unmarked.
pub fn current_streak(history: &ReadingHistory, today: NaiveDate) -> u32 {
    let mut day = match history.status(today) {
        Some(_) => today,
        None => today - Duration::days(1),
    };
    let mut streak = 0;
    while history.status(day) == Some(DayStatus::Success) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
