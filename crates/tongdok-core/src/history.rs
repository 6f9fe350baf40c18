//! Per-day reading history.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TongdokError;

/// Outcome recorded for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Success,
    Fail,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayStatus {
    type Err = TongdokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "fail" => Ok(Self::Fail),
            other => Err(TongdokError::InvalidInput(format!(
                "Unknown day status: {} (expected success or fail)",
                other
            ))),
        }
    }
}

/// Date-keyed history. Marking a day twice overwrites the earlier mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingHistory {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl ReadingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, date: NaiveDate, status: DayStatus) {
        self.days.insert(date, status);
    }

    /// Remove a mark. Returns the previous status, if any.
    pub fn unmark(&mut self, date: NaiveDate) -> Option<DayStatus> {
        self.days.remove(&date)
    }

    pub fn status(&self, date: NaiveDate) -> Option<DayStatus> {
        self.days.get(&date).copied()
    }

    /// Days in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.days.iter().map(|(date, status)| (*date, *status))
    }

    /// Days with `from <= date < until`.
    pub fn range(
        &self,
        from: NaiveDate,
        until: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.days
            .range(from..until.max(from))
            .map(|(date, status)| (*date, *status))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(NaiveDate, DayStatus)> for ReadingHistory {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayStatus)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
