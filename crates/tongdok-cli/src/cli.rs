use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tongdok_core::VERSION;

use crate::constants::plan_defaults;

/// Tongdok - a Bible read-through companion for the terminal
#[derive(Parser)]
#[command(name = "tongdok")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the reading database
    #[arg(long, global = true, env = "TONGDOK_DB", value_name = "PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Plain key=value output even on a terminal
    #[arg(long, global = true)]
    pub plain: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Old Testament book to start from
    #[arg(long, default_value = plan_defaults::OT_BOOK)]
    pub ot_book: String,

    /// Chapter of the Old Testament book to start from
    #[arg(long, default_value_t = 1)]
    pub ot_chapter: u32,

    /// Old Testament chapters per day
    #[arg(long, default_value_t = plan_defaults::OT_CHAPTERS_PER_DAY)]
    pub ot_per_day: u32,

    /// New Testament book to start from
    #[arg(long, default_value = plan_defaults::NT_BOOK)]
    pub nt_book: String,

    /// Chapter of the New Testament book to start from
    #[arg(long, default_value_t = 1)]
    pub nt_chapter: u32,

    /// New Testament chapters per day
    #[arg(long, default_value_t = plan_defaults::NT_CHAPTERS_PER_DAY)]
    pub nt_per_day: u32,

    /// First day of the plan (YYYY-MM-DD, default today)
    #[arg(long)]
    pub start: Option<String>,

    /// Timezone for "today" written to a new config file (e.g. Asia/Seoul)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Replace an existing plan
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Show the portion for another date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MarkStatus {
    Success,
    Fail,
}

/// Arguments for the `mark` command
#[derive(Args)]
pub struct MarkArgs {
    /// Outcome of the day's reading
    #[arg(value_enum)]
    pub status: MarkStatus,

    /// Day to mark (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `unmark` command
#[derive(Args)]
pub struct UnmarkArgs {
    /// Day to clear (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `plan` command
#[derive(Args)]
pub struct PlanArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Month to view (YYYY-MM, default this month)
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum BookmarkSubcommand {
    /// Bookmark a chapter
    Add {
        /// Book name (e.g. 시편)
        book: String,
        chapter: u32,
        #[arg(long)]
        note: Option<String>,
    },
    /// List bookmarks
    List {
        #[arg(long)]
        json: bool,
    },
    /// Remove a bookmark by ID or ID prefix
    Remove { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorArg {
    Yellow,
    Green,
    Blue,
    Pink,
}

#[derive(Subcommand)]
pub enum HighlightSubcommand {
    /// Highlight a verse
    Add {
        book: String,
        chapter: u32,
        verse: u32,
        /// Verse text
        #[arg(long)]
        text: String,
        #[arg(long, value_enum, default_value_t = ColorArg::Yellow)]
        color: ColorArg,
        #[arg(long)]
        note: Option<String>,
    },
    /// List highlights
    List {
        /// Only highlights in this book
        #[arg(long)]
        book: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Remove a highlight by ID or ID prefix
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum JournalSubcommand {
    /// Write a journal entry (body from argument or stdin)
    Add {
        body: Option<String>,
        /// Day the entry belongs to (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Passage the entry reflects on (default: that day's portion)
        #[arg(long)]
        passage: Option<String>,
    },
    /// List journal entries, newest first
    List {
        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        since: Option<String>,
        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        until: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ReflectionSubcommand {
    /// Validate a reflection JSON payload and store it
    Import {
        /// File with the payload (default: stdin)
        file: Option<String>,
        #[arg(long)]
        date: Option<String>,
        /// Passage key (default: that day's portion)
        #[arg(long)]
        passage: Option<String>,
    },
    /// Show a stored reflection
    Show {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        passage: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Drop a stored reflection
    Clear {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        passage: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Sepia,
}

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show reader preferences
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the reader theme
    Theme {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Set the reader font size (clamped to 12-32)
    FontSize { size: u32 },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TestamentArg {
    Old,
    New,
}

/// Arguments for the `books` command
#[derive(Args)]
pub struct BooksArgs {
    /// Only one testament
    #[arg(long, value_enum)]
    pub testament: Option<TestamentArg>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or replace the reading plan
    Init(InitArgs),

    /// Show the day's portion
    Today(TodayArgs),

    /// Record a day as read or missed
    Mark(MarkArgs),

    /// Clear a day's record
    Unmark(UnmarkArgs),

    /// Pause the plan (portions stop advancing)
    Pause,

    /// Resume a paused plan
    Resume,

    /// Show the reading plan and progress
    Plan(PlanArgs),

    /// Monthly achievement statistics
    Stats(StatsArgs),

    /// Manage bookmarks
    #[command(subcommand)]
    Bookmark(BookmarkSubcommand),

    /// Manage verse highlights
    #[command(subcommand)]
    Highlight(HighlightSubcommand),

    /// Reading journal
    #[command(subcommand)]
    Journal(JournalSubcommand),

    /// Daily reflections
    #[command(subcommand)]
    Reflection(ReflectionSubcommand),

    /// Reader preferences
    #[command(subcommand)]
    Settings(SettingsSubcommand),

    /// List the books of the canon
    Books(BooksArgs),

    /// Check database integrity
    Check,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
