//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (reported by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Missing plan, record, or reflection.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Defaults offered by `tongdok init`.
pub mod plan_defaults {
    pub const OT_BOOK: &str = "창세기";
    pub const NT_BOOK: &str = "마태복음";
    pub const OT_CHAPTERS_PER_DAY: u32 = 3;
    pub const NT_CHAPTERS_PER_DAY: u32 = 1;
}

/// Journal entries shown by `journal list` without filters.
pub const DEFAULT_JOURNAL_LIMIT: usize = 20;
