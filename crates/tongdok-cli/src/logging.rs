//! Logging setup for the `tongdok` binary.
//!
//! Logs always go to stderr so stdout stays parseable. The filter comes from
//! `-v`, then `TONGDOK_LOG` or `RUST_LOG`, then the config file.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text output (no target, for end users)
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Multi-line with source locations (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    /// `-v` count: 1 is debug, 2 or more is trace
    pub verbosity: u8,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: impl Into<String>, verbosity: u8) -> Self {
        Self {
            format,
            level: level.into(),
            verbosity,
        }
    }

    fn filter(&self) -> EnvFilter {
        match self.verbosity {
            0 => EnvFilter::try_from_env("TONGDOK_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new(&self.level)),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }

    /// Install the global subscriber. A second call is a no-op.
    pub fn init(&self) {
        let filter = self.filter();
        let result = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };
        if result.is_err() {
            tracing::debug!("logging already initialized");
        }
    }
}

/// Pick the format from `TONGDOK_LOG_FORMAT`, then the config value.
pub fn resolve_format(config_format: Option<&str>) -> LogFormat {
    let from_env = std::env::var("TONGDOK_LOG_FORMAT").ok();
    from_env
        .as_deref()
        .or(config_format)
        .and_then(|value| match value.parse() {
            Ok(format) => Some(format),
            Err(err) => {
                eprintln!("warning: {}", err);
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(err.contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_verbosity_overrides_level() {
        let config = LoggingConfig::new(LogFormat::Text, "error", 1);
        assert_eq!(config.filter().to_string(), "debug");
        let config = LoggingConfig::new(LogFormat::Text, "error", 3);
        assert_eq!(config.filter().to_string(), "trace");
    }
}
