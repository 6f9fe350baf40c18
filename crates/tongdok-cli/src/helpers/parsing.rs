//! Parsing helpers for dates, months, and command input.

use std::io::{IsTerminal, Read};

use chrono::{Datelike, NaiveDate};

use crate::errors::CliError;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Parse an optional date argument, defaulting to `today`.
pub fn date_or(value: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    value.map(parse_date).unwrap_or(Ok(today))
}

/// Parse a `YYYY-MM` month into `(year, month)`.
pub fn parse_month(value: &str) -> anyhow::Result<(i32, u32)> {
    let invalid = || {
        CliError::invalid_input(format!("Invalid month (expected YYYY-MM): {}", value))
    };

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    // Rejects month 0 and 13+.
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    Ok((first.year(), first.month()))
}

/// Text from an argument, a file, or stdin, in that order.
pub fn read_input(inline: Option<&str>, file: Option<&str>, what: &str) -> anyhow::Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} from {}: {}", what, path, e));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::invalid_input_with_hint(
            format!("No {} given", what),
            format!("Pass the {} as an argument or pipe it on stdin.", what),
        )
        .into());
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read {} from stdin: {}", what, e))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("02/01/2025").is_err());
    }

    #[test]
    fn test_date_or_defaults() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(date_or(None, today).unwrap(), today);
        assert_eq!(
            date_or(Some("2025-06-03"), today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
        );
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert_eq!(parse_month(" 2024-12 ").unwrap(), (2024, 12));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("2025-00").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn test_read_input_prefers_inline() {
        assert_eq!(read_input(Some("본문"), Some("/nope"), "body").unwrap(), "본문");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, "{}").unwrap();
        let text = read_input(None, path.to_str(), "payload").unwrap();
        assert_eq!(text, "{}");
    }
}
