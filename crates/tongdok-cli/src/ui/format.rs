//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::theme::{BAR_EMPTY, BAR_FULL};

/// Truncate to `max_len` characters, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Wrap text to a given width, preserving newlines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// First 8 characters of a UUID.
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Replace newlines so a value fits on one output line.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Horizontal bar for a percentage in `0..=100`.
pub fn percent_bar(percent: u32, width: usize, unicode: bool) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!(
        "{}{}",
        BAR_FULL.get(unicode).repeat(filled),
        BAR_EMPTY.get(unicode).repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("데살로니가전서", 5), "데살...");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("hello world foo bar", 10), vec!["hello", "world foo", "bar"]);
        assert_eq!(wrap("hello\n\nworld", 20), vec!["hello", "", "world"]);
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::parse_str("7a2e3c0b-1234-5678-9abc-def012345678").unwrap();
        assert_eq!(short_id(&id), "7a2e3c0b");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\r\nworld"), "hello world");
    }

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(0, 4, false), "....");
        assert_eq!(percent_bar(50, 4, false), "##..");
        assert_eq!(percent_bar(100, 4, false), "####");
        assert_eq!(percent_bar(250, 4, false), "####");
    }
}
