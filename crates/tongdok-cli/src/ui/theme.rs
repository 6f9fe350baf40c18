//! Badges, symbols, and color styles.

use owo_colors::{OwoColorize, Style};

use tongdok_core::DayStatus;

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub const SUCCESS_MARK: SymbolPair = SymbolPair::new("o", "\u{2713}");
pub const FAIL_MARK: SymbolPair = SymbolPair::new("x", "\u{2717}");
pub const BAR_FULL: SymbolPair = SymbolPair::new("#", "\u{2588}");
pub const BAR_EMPTY: SymbolPair = SymbolPair::new(".", "\u{2591}");

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",
            Self::Warn => "[\u{26A0}]",
            Self::Err => "[\u{2717}]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warning(),
            Self::Err => styles::error(),
        }
    }
}

/// Mark shown next to a day with a recorded outcome.
pub fn status_mark(status: DayStatus, unicode: bool) -> &'static str {
    match status {
        DayStatus::Success => SUCCESS_MARK.get(unicode),
        DayStatus::Fail => FAIL_MARK.get(unicode),
    }
}

pub fn status_style(status: DayStatus) -> Style {
    match status {
        DayStatus::Success => styles::success(),
        DayStatus::Fail => styles::error(),
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }
}

/// Apply `style` when color output is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
