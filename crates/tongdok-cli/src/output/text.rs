//! Text and table output for plans, portions, and stored records.

use chrono::NaiveDate;

use tongdok_core::canon::{Book, Testament};
use tongdok_core::prefs::Preferences;
use tongdok_core::reflection::DailyReflection;
use tongdok_core::stats::MonthlyStats;
use tongdok_core::storage::{Bookmark, Highlight, JournalEntry};
use tongdok_core::{DailyPortion, DayStatus, ReadingPlan};

use crate::ui::format::{percent_bar, wrap};
use crate::ui::theme::{status_mark, status_style, styled, styles};
use crate::ui::{
    badge, blank_line, format_datetime, header, kv, print, short_id, simple_table, single_line,
    table, truncate, Badge, Column, UiContext,
};

use super::progress_percent;

const BAR_WIDTH: usize = 20;

fn track_key(ctx: &UiContext, testament: Testament) -> &'static str {
    match (ctx.mode.is_pretty(), testament) {
        (true, t) => t.label(),
        (false, Testament::Old) => "old_testament",
        (false, Testament::New) => "new_testament",
    }
}

fn status_text(ctx: &UiContext, status: DayStatus) -> String {
    if ctx.mode.is_pretty() {
        let text = format!("{} {}", status_mark(status, ctx.unicode), status);
        styled(&text, status_style(status), ctx.color)
    } else {
        status.to_string()
    }
}

fn progress_text(ctx: &UiContext, percent: u32) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {:>3}%", percent_bar(percent, BAR_WIDTH, ctx.unicode), percent)
    } else {
        percent.to_string()
    }
}

fn print_tracks(ctx: &UiContext, portion: &DailyPortion) {
    match portion {
        DailyPortion::NotStarted { days_until } => {
            print(ctx, &kv(ctx, "Starts in", &format!("{} days", days_until)));
        }
        DailyPortion::Scheduled {
            day_offset,
            old,
            new,
        } => {
            print(ctx, &kv(ctx, "Day", &(day_offset + 1).to_string()));
            print(ctx, &kv(ctx, track_key(ctx, Testament::Old), &old.to_string()));
            print(ctx, &kv(ctx, track_key(ctx, Testament::New), &new.to_string()));
        }
    }
}

pub fn print_portion(
    ctx: &UiContext,
    portion: &DailyPortion,
    date: NaiveDate,
    status: Option<DayStatus>,
    paused: bool,
) {
    print(ctx, &header(ctx, "today", Some(&date.to_string())));
    if !ctx.mode.is_pretty() {
        print(ctx, &kv(ctx, "Date", &date.to_string()));
    }
    print_tracks(ctx, portion);

    if let Some(status) = status {
        print(ctx, &kv(ctx, "Status", &status_text(ctx, status)));
    }

    if ctx.mode.is_pretty() {
        if portion.is_finished() {
            blank_line(ctx);
            print(ctx, &badge(ctx, Badge::Ok, "통독 완료"));
        }
        if paused {
            blank_line(ctx);
            print(
                ctx,
                &badge(ctx, Badge::Warn, "Plan is paused; run `tongdok resume` to continue."),
            );
        }
    } else {
        print(ctx, &kv(ctx, "Finished", &portion.is_finished().to_string()));
        print(ctx, &kv(ctx, "Paused", &paused.to_string()));
    }
}

fn track_line(plan: &ReadingPlan, testament: Testament) -> String {
    let track = plan.track(testament);
    format!(
        "{} {}장, {} chapters/day",
        track.book, track.start_chapter, track.chapters_per_day
    )
}

pub fn print_plan(ctx: &UiContext, plan: &ReadingPlan, today: NaiveDate, portion: &DailyPortion) {
    print(ctx, &header(ctx, "plan", None));
    print(ctx, &kv(ctx, "Start date", &plan.start_date.to_string()));
    print(ctx, &kv(ctx, "Old track", &track_line(plan, Testament::Old)));
    print(ctx, &kv(ctx, "New track", &track_line(plan, Testament::New)));

    let paused_value = match plan.paused_at {
        Some(since) if plan.is_paused => format!("yes (since {})", since),
        _ => "no".to_string(),
    };
    print(ctx, &kv(ctx, "Paused", &paused_value));
    print(
        ctx,
        &kv(ctx, "Paused days", &plan.paused_days_as_of(today).to_string()),
    );

    blank_line(ctx);
    print(ctx, &kv(ctx, "Today", &today.to_string()));
    print_tracks(ctx, portion);

    if let DailyPortion::Scheduled { old, new, .. } = portion {
        let ot = progress_percent(old, Testament::Old.books());
        let nt = progress_percent(new, Testament::New.books());
        print(ctx, &kv(ctx, "Old progress", &progress_text(ctx, ot)));
        print(ctx, &kv(ctx, "New progress", &progress_text(ctx, nt)));
    }
}

pub fn print_stats(
    ctx: &UiContext,
    months: &[MonthlyStats],
    viewed: &str,
    streak: u32,
    days: &[(NaiveDate, DayStatus)],
) {
    print(ctx, &header(ctx, "stats", Some(viewed)));

    let columns = [
        Column::new("Month"),
        Column::new("Success"),
        Column::new("Fail"),
        Column::new("Total"),
        Column::new("Rate"),
    ];
    let rows: Vec<Vec<String>> = months
        .iter()
        .map(|m| {
            let month = if ctx.mode.is_pretty() && m.month == viewed {
                styled(&m.month, styles::bold(), ctx.color)
            } else {
                m.month.clone()
            };
            vec![
                month,
                m.success.to_string(),
                m.fail.to_string(),
                m.total.to_string(),
                progress_text(ctx, m.rate),
            ]
        })
        .collect();
    print(ctx, &table(ctx, &columns, &rows));

    blank_line(ctx);
    print(ctx, &kv(ctx, "Streak", &format!("{} days", streak)));

    if days.is_empty() {
        return;
    }
    if ctx.mode.is_pretty() {
        let marks: Vec<String> = days
            .iter()
            .map(|(date, status)| {
                let mark = status_mark(*status, ctx.unicode);
                let cell = format!("{}{}", date.format("%d"), mark);
                styled(&cell, status_style(*status), ctx.color)
            })
            .collect();
        print(ctx, &kv(ctx, viewed, &marks.join(" ")));
    } else {
        for (date, status) in days {
            print(ctx, &kv(ctx, "Day", &format!("{} {}", date, status)));
        }
    }
}

pub fn print_bookmarks(ctx: &UiContext, bookmarks: &[Bookmark]) {
    let columns = [
        Column::new("ID"),
        Column::new("Chapter"),
        Column::with_max_width("Note", 40),
        Column::new("Created"),
    ];
    let rows: Vec<Vec<String>> = bookmarks
        .iter()
        .map(|b| {
            vec![
                short_id(&b.id),
                format!("{} {}장", b.book, b.chapter),
                b.note.as_deref().map(single_line).unwrap_or_else(|| "-".to_string()),
                format_datetime(&b.created_at, ctx.mode.is_pretty()),
            ]
        })
        .collect();
    print(ctx, &simple_table(ctx, &columns, &rows));
}

pub fn print_highlights(ctx: &UiContext, highlights: &[Highlight]) {
    let columns = [
        Column::new("ID"),
        Column::new("Verse"),
        Column::new("Color"),
        Column::with_max_width("Text", 40),
        Column::with_max_width("Note", 24),
    ];
    let rows: Vec<Vec<String>> = highlights
        .iter()
        .map(|h| {
            vec![
                short_id(&h.id),
                format!("{} {}:{}", h.book, h.chapter, h.verse),
                h.color.to_string(),
                single_line(&h.text),
                h.note.as_deref().map(single_line).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print(ctx, &simple_table(ctx, &columns, &rows));
}

pub fn print_journal(ctx: &UiContext, entries: &[JournalEntry]) {
    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::with_max_width("Passage", 30),
        Column::with_max_width("Entry", 50),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                short_id(&e.id),
                e.date.to_string(),
                e.passage.clone().unwrap_or_else(|| "-".to_string()),
                single_line(&e.body),
            ]
        })
        .collect();
    print(ctx, &simple_table(ctx, &columns, &rows));
}

fn print_section(ctx: &UiContext, title: &str, body: &str) {
    if ctx.mode.is_pretty() {
        blank_line(ctx);
        print(ctx, &styled(title, styles::bold(), ctx.color));
        for line in wrap(body, ctx.width.saturating_sub(2).max(20)) {
            print(ctx, &format!("  {}", line));
        }
    } else {
        print(ctx, &kv(ctx, title, &single_line(body)));
    }
}

pub fn print_reflection(
    ctx: &UiContext,
    date: NaiveDate,
    passage: &str,
    reflection: &DailyReflection,
) {
    print(ctx, &header(ctx, "reflection", Some(&date.to_string())));
    if ctx.mode.is_pretty() {
        print(ctx, &styled(&reflection.title, styles::bold(), ctx.color));
        print(ctx, &kv(ctx, "Passage", passage));
    } else {
        print(ctx, &kv(ctx, "Title", &reflection.title));
        print(ctx, &kv(ctx, "Passage", passage));
    }

    print_section(ctx, "Summary", &reflection.summary);
    print_section(ctx, "Meditation", &reflection.meditation);
    print_section(ctx, "Prayer", &reflection.prayer);

    if ctx.mode.is_pretty() {
        blank_line(ctx);
        print(ctx, &styled("Questions", styles::bold(), ctx.color));
        for (i, question) in reflection.questions.iter().enumerate() {
            print(ctx, &format!("  {}. {}", i + 1, question));
        }
    } else {
        for question in &reflection.questions {
            print(ctx, &kv(ctx, "Question", &single_line(question)));
        }
    }
}

pub fn print_books(ctx: &UiContext, testaments: &[Testament]) {
    let columns = [
        Column::new("Testament"),
        Column::new("Book"),
        Column::new("Chapters"),
    ];
    let rows: Vec<Vec<String>> = testaments
        .iter()
        .flat_map(|testament| {
            testament.books().iter().map(move |book: &Book| {
                vec![
                    testament.label().to_string(),
                    book.name.to_string(),
                    book.chapters.to_string(),
                ]
            })
        })
        .collect();
    print(ctx, &table(ctx, &columns, &rows));
}

pub fn print_prefs(ctx: &UiContext, prefs: &Preferences) {
    print(ctx, &header(ctx, "settings", None));
    print(ctx, &kv(ctx, "Theme", prefs.theme.as_str()));
    print(ctx, &kv(ctx, "Font size", &prefs.font_size.to_string()));
}

/// Shorten free text for a one-line receipt value.
pub fn preview(text: &str) -> String {
    truncate(&single_line(text.trim()), 40)
}
