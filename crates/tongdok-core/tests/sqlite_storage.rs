use chrono::NaiveDate;
use tempfile::tempdir;

use tongdok_core::prefs::{Preferences, Theme};
use tongdok_core::storage::{
    HighlightColor, JournalFilter, KvStore, NewBookmark, NewHighlight, NewJournalEntry,
    SqliteStorage, StorageEngine,
};
use tongdok_core::{DailyPortion, DayStatus, PlanSetup, ReadingPlan, TongdokError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample_plan() -> ReadingPlan {
    ReadingPlan::new(PlanSetup {
        ot_book: "창세기".to_string(),
        ot_start_chapter: 1,
        nt_book: "마태복음".to_string(),
        nt_start_chapter: 1,
        start_date: date(2025, 1, 1),
        ot_chapters_per_day: 1,
        nt_chapters_per_day: 1,
    })
    .expect("plan should be valid")
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("tongdok.db");

    {
        let mut storage = SqliteStorage::open(&path).expect("open should succeed");
        storage.replace_plan(&sample_plan()).expect("replace plan");
        storage
            .mark_day(date(2025, 1, 2), DayStatus::Fail)
            .expect("mark day");
        storage
            .add_bookmark(&NewBookmark::new("시편", 23).with_note("목자"))
            .expect("add bookmark");

        let mut prefs = Preferences::default();
        prefs.theme = Theme::Dark;
        prefs.save(&mut storage).expect("save prefs");
    }

    let storage = SqliteStorage::open(&path).expect("reopen should succeed");
    assert!(path.exists());
    storage.check_integrity().expect("integrity");

    let plan = storage.get_plan().expect("get plan").expect("plan exists");
    let history = storage.load_history().expect("load history");

    // Day 1 failed, so 2025-01-03 repeats day 1's portion.
    match plan.portion_for(&history, date(2025, 1, 3)) {
        DailyPortion::Scheduled {
            day_offset,
            old,
            new,
        } => {
            assert_eq!(day_offset, 1);
            assert_eq!(old.to_string(), "창세기 2장");
            assert_eq!(new.to_string(), "마태복음 2장");
        }
        other => panic!("unexpected portion {:?}", other),
    }

    let bookmarks = storage.list_bookmarks().expect("list bookmarks");
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].note.as_deref(), Some("목자"));

    assert_eq!(
        Preferences::load(&storage).expect("load prefs").theme,
        Theme::Dark
    );
}

#[test]
fn test_bookmark_and_highlight_deletion() {
    let mut storage = SqliteStorage::open_in_memory().expect("open");

    let id = storage
        .add_bookmark(&NewBookmark::new("로마서", 8))
        .expect("add bookmark");
    storage.delete_bookmark(&id).expect("delete bookmark");
    let err = storage.delete_bookmark(&id).unwrap_err();
    assert!(matches!(err, TongdokError::NotFound(_)));

    let highlight = NewHighlight {
        book: "요한복음".to_string(),
        chapter: 3,
        verse: 16,
        text: "하나님이 세상을 이처럼 사랑하사".to_string(),
        color: HighlightColor::Pink,
        note: None,
    };
    let id = storage.add_highlight(&highlight).expect("add highlight");
    storage
        .add_highlight(&NewHighlight {
            book: "시편".to_string(),
            chapter: 1,
            verse: 1,
            text: "복 있는 사람은".to_string(),
            color: HighlightColor::Yellow,
            note: None,
        })
        .expect("add highlight");

    assert_eq!(storage.list_highlights(None).expect("list").len(), 2);
    let john = storage.list_highlights(Some("요한복음")).expect("list");
    assert_eq!(john.len(), 1);
    assert_eq!(john[0].color, HighlightColor::Pink);

    storage.delete_highlight(&id).expect("delete highlight");
    assert!(storage
        .list_highlights(Some("요한복음"))
        .expect("list")
        .is_empty());
}

#[test]
fn test_journal_filtering() {
    let mut storage = SqliteStorage::open_in_memory().expect("open");
    for day in 1..=5 {
        storage
            .add_journal_entry(
                &NewJournalEntry::new(date(2025, 2, day), format!("day {}", day))
                    .with_passage("창세기 1장"),
            )
            .expect("add entry");
    }

    let all = storage
        .list_journal_entries(&JournalFilter::new())
        .expect("list");
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].date, date(2025, 2, 5));

    let window = storage
        .list_journal_entries(
            &JournalFilter::new()
                .since(date(2025, 2, 2))
                .until(date(2025, 2, 4)),
        )
        .expect("list");
    let days: Vec<_> = window.iter().map(|entry| entry.date).collect();
    assert_eq!(days, vec![date(2025, 2, 4), date(2025, 2, 3), date(2025, 2, 2)]);

    let limited = storage
        .list_journal_entries(&JournalFilter::new().limit(2))
        .expect("list");
    assert_eq!(limited.len(), 2);
}

#[test]
fn test_kv_store_is_shared_with_sqlite() {
    let mut storage = SqliteStorage::open_in_memory().expect("open");
    storage.set("reflection:x", "{}").expect("set");
    assert_eq!(storage.get("reflection:x").expect("get").as_deref(), Some("{}"));
}
