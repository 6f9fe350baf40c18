//! Reading plan: two parallel tracks (Old and New Testament) sharing a start
//! date, plus pause bookkeeping.
//!
//! A plan is created once and replaced wholesale when edited. The only
//! in-place mutations are pausing and resuming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::canon::{find_book, Testament};
use crate::error::{Result, TongdokError};
use crate::history::{DayStatus, ReadingHistory};
use crate::schedule::{whole_days_between, DailyPortion};

/// Upper bound on the per-day quota accepted at setup.
pub const MAX_CHAPTERS_PER_DAY: u32 = 10;

/// User-supplied values for a new plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSetup {
    pub ot_book: String,
    pub ot_start_chapter: u32,
    pub nt_book: String,
    pub nt_start_chapter: u32,
    pub start_date: NaiveDate,
    pub ot_chapters_per_day: u32,
    pub nt_chapters_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPlan {
    pub ot_book: String,
    pub ot_start_chapter: u32,
    pub nt_book: String,
    pub nt_start_chapter: u32,
    pub start_date: NaiveDate,
    pub ot_chapters_per_day: u32,
    pub nt_chapters_per_day: u32,
    pub is_paused: bool,
    pub paused_at: Option<NaiveDate>,
    pub total_paused_days: i64,
}

/// One testament's slice of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTrack<'a> {
    pub book: &'a str,
    pub start_chapter: u32,
    pub chapters_per_day: u32,
}

fn validate_track(
    testament: Testament,
    book: &str,
    start_chapter: u32,
    chapters_per_day: u32,
) -> Result<()> {
    let books = testament.books();
    let index = find_book(books, book).ok_or_else(|| {
        TongdokError::InvalidInput(format!(
            "{} is not a book of the {}",
            book,
            testament.label()
        ))
    })?;
    let chapters = books[index].chapters;
    if start_chapter == 0 || start_chapter > chapters {
        return Err(TongdokError::InvalidInput(format!(
            "{} has chapters 1-{}, got {}",
            book, chapters, start_chapter
        )));
    }
    if chapters_per_day == 0 || chapters_per_day > MAX_CHAPTERS_PER_DAY {
        return Err(TongdokError::InvalidInput(format!(
            "Chapters per day must be between 1 and {}, got {}",
            MAX_CHAPTERS_PER_DAY, chapters_per_day
        )));
    }
    Ok(())
}

impl ReadingPlan {
    /// Build a validated, unpaused plan.
    pub fn new(setup: PlanSetup) -> Result<Self> {
        validate_track(
            Testament::Old,
            &setup.ot_book,
            setup.ot_start_chapter,
            setup.ot_chapters_per_day,
        )?;
        validate_track(
            Testament::New,
            &setup.nt_book,
            setup.nt_start_chapter,
            setup.nt_chapters_per_day,
        )?;

        Ok(Self {
            ot_book: setup.ot_book,
            ot_start_chapter: setup.ot_start_chapter,
            nt_book: setup.nt_book,
            nt_start_chapter: setup.nt_start_chapter,
            start_date: setup.start_date,
            ot_chapters_per_day: setup.ot_chapters_per_day,
            nt_chapters_per_day: setup.nt_chapters_per_day,
            is_paused: false,
            paused_at: None,
            total_paused_days: 0,
        })
    }

    pub fn track(&self, testament: Testament) -> PlanTrack<'_> {
        match testament {
            Testament::Old => PlanTrack {
                book: &self.ot_book,
                start_chapter: self.ot_start_chapter,
                chapters_per_day: self.ot_chapters_per_day,
            },
            Testament::New => PlanTrack {
                book: &self.nt_book,
                start_chapter: self.nt_start_chapter,
                chapters_per_day: self.nt_chapters_per_day,
            },
        }
    }

    /// Paused days to subtract when computing the offset for `target`.
    ///
    /// While a pause is in progress the days since `paused_at` count too, so
    /// the portion stays frozen until the plan is resumed.
    pub fn paused_days_as_of(&self, target: NaiveDate) -> i64 {
        let ongoing = match (self.is_paused, self.paused_at) {
            (true, Some(paused_at)) => whole_days_between(paused_at, target).max(0),
            _ => 0,
        };
        self.total_paused_days + ongoing
    }

    pub fn pause(&mut self, today: NaiveDate) -> Result<()> {
        if self.is_paused {
            return Err(TongdokError::InvalidInput(
                "Plan is already paused".to_string(),
            ));
        }
        self.is_paused = true;
        self.paused_at = Some(today);
        tracing::info!(%today, "plan paused");
        Ok(())
    }

    /// Resume a paused plan. Returns the number of days the pause lasted.
    pub fn resume(&mut self, today: NaiveDate) -> Result<i64> {
        if !self.is_paused {
            return Err(TongdokError::InvalidInput("Plan is not paused".to_string()));
        }
        let paused_for = self
            .paused_at
            .map(|paused_at| whole_days_between(paused_at, today).max(0))
            .unwrap_or(0);
        self.total_paused_days += paused_for;
        self.is_paused = false;
        self.paused_at = None;
        tracing::info!(%today, paused_for, total = self.total_paused_days, "plan resumed");
        Ok(paused_for)
    }

    /// Whether `status` may be recorded for `date`.
    ///
    /// Days since `paused_at` already count as paused, so a failed day inside
    /// a running pause would be subtracted twice and move the portion back.
    pub fn check_mark(&self, date: NaiveDate, status: DayStatus) -> Result<()> {
        match (self.is_paused, self.paused_at) {
            (true, Some(paused_at)) if status == DayStatus::Fail && date >= paused_at => {
                Err(TongdokError::InvalidInput(format!(
                    "Cannot mark {} as failed while the plan is paused (since {})",
                    date, paused_at
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn portion_for(&self, history: &ReadingHistory, date: NaiveDate) -> DailyPortion {
        DailyPortion::for_date(self, history, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::effective_day_offset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> PlanSetup {
        PlanSetup {
            ot_book: "창세기".to_string(),
            ot_start_chapter: 1,
            nt_book: "마태복음".to_string(),
            nt_start_chapter: 1,
            start_date: date(2025, 1, 1),
            ot_chapters_per_day: 3,
            nt_chapters_per_day: 1,
        }
    }

    #[test]
    fn test_new_plan_is_unpaused() {
        let plan = ReadingPlan::new(setup()).unwrap();
        assert!(!plan.is_paused);
        assert_eq!(plan.paused_at, None);
        assert_eq!(plan.total_paused_days, 0);
        assert_eq!(plan.track(Testament::Old).chapters_per_day, 3);
        assert_eq!(plan.track(Testament::New).book, "마태복음");
    }

    #[test]
    fn test_rejects_book_from_wrong_testament() {
        let mut bad = setup();
        bad.ot_book = "로마서".to_string();
        let err = ReadingPlan::new(bad).unwrap_err();
        assert!(matches!(err, TongdokError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_out_of_range_chapter() {
        let mut bad = setup();
        bad.nt_book = "유다서".to_string();
        bad.nt_start_chapter = 2;
        assert!(ReadingPlan::new(bad).is_err());

        let mut bad = setup();
        bad.ot_start_chapter = 0;
        assert!(ReadingPlan::new(bad).is_err());
    }

    #[test]
    fn test_rejects_bad_quota() {
        let mut bad = setup();
        bad.ot_chapters_per_day = 0;
        assert!(ReadingPlan::new(bad).is_err());

        let mut bad = setup();
        bad.nt_chapters_per_day = MAX_CHAPTERS_PER_DAY + 1;
        assert!(ReadingPlan::new(bad).is_err());
    }

    #[test]
    fn test_pause_and_resume_accumulates() {
        let mut plan = ReadingPlan::new(setup()).unwrap();
        plan.pause(date(2025, 1, 5)).unwrap();
        assert!(plan.pause(date(2025, 1, 6)).is_err());
        assert_eq!(plan.paused_days_as_of(date(2025, 1, 8)), 3);

        assert_eq!(plan.resume(date(2025, 1, 8)).unwrap(), 3);
        assert!(!plan.is_paused);
        assert_eq!(plan.total_paused_days, 3);
        assert!(plan.resume(date(2025, 1, 9)).is_err());

        plan.pause(date(2025, 2, 1)).unwrap();
        plan.resume(date(2025, 2, 3)).unwrap();
        assert_eq!(plan.total_paused_days, 5);
        assert_eq!(plan.paused_days_as_of(date(2025, 3, 1)), 5);
    }

    #[test]
    fn test_portion_frozen_while_paused() {
        let mut plan = ReadingPlan::new(setup()).unwrap();
        let history = ReadingHistory::new();
        plan.pause(date(2025, 1, 3)).unwrap();

        let on_pause = plan.portion_for(&history, date(2025, 1, 3));
        let week_later = plan.portion_for(&history, date(2025, 1, 10));
        assert_eq!(on_pause, week_later);
    }

    #[test]
    fn test_fail_inside_pause_is_rejected() {
        let mut plan = ReadingPlan::new(setup()).unwrap();
        plan.pause(date(2025, 1, 3)).unwrap();

        let err = plan.check_mark(date(2025, 1, 4), DayStatus::Fail).unwrap_err();
        assert!(matches!(err, TongdokError::InvalidInput(_)));
        assert!(plan.check_mark(date(2025, 1, 3), DayStatus::Fail).is_err());
        assert!(plan.check_mark(date(2025, 1, 2), DayStatus::Fail).is_ok());
        assert!(plan.check_mark(date(2025, 1, 4), DayStatus::Success).is_ok());

        plan.resume(date(2025, 1, 6)).unwrap();
        assert!(plan.check_mark(date(2025, 1, 7), DayStatus::Fail).is_ok());
    }

    #[test]
    fn test_offset_never_moves_back_across_a_pause() {
        let mut plan = ReadingPlan::new(setup()).unwrap();
        let mut history = ReadingHistory::new();
        plan.pause(date(2025, 1, 3)).unwrap();
        let at_pause = effective_day_offset(&plan, &history, date(2025, 1, 3));

        for day in [date(2025, 1, 3), date(2025, 1, 4), date(2025, 1, 5)] {
            if plan.check_mark(day, DayStatus::Fail).is_ok() {
                history.mark(day, DayStatus::Fail);
            }
            assert_eq!(effective_day_offset(&plan, &history, day), at_pause);
        }

        plan.resume(date(2025, 1, 6)).unwrap();
        assert_eq!(effective_day_offset(&plan, &history, date(2025, 1, 6)), at_pause);
        assert_eq!(effective_day_offset(&plan, &history, date(2025, 1, 7)), at_pause + 1);
    }
}
