//! Terminal detection for UI decisions.

use std::io::IsTerminal;

use super::mode::OutputMode;

const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build a context from the environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        plain_flag: bool,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(DEFAULT_WIDTH),
            mode: OutputMode::resolve(json_flag, plain_flag, is_tty, term_is_dumb),
        }
    }
}

/// Width from `COLUMNS`, else the terminal size comfy-table detects on a tty.
fn terminal_width() -> Option<usize> {
    pick_width(
        std::env::var("COLUMNS").ok().as_deref(),
        comfy_table::Table::new().width(),
    )
}

fn pick_width(columns: Option<&str>, detected: Option<u16>) -> Option<usize> {
    columns
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
        .or_else(|| detected.map(usize::from).filter(|width| *width > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_wins_over_detected_size() {
        assert_eq!(pick_width(Some("120"), Some(90)), Some(120));
    }

    #[test]
    fn test_detected_size_used_without_columns() {
        assert_eq!(pick_width(None, Some(90)), Some(90));
        assert_eq!(pick_width(Some("wide"), Some(90)), Some(90));
        assert_eq!(pick_width(Some("0"), Some(0)), None);
        assert_eq!(pick_width(None, None), None);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, true, true, true);
        assert!(ctx.width > 0);
    }
}
