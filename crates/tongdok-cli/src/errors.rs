//! CLI error types that map to specific exit codes.

use std::fmt;

use tongdok_core::TongdokError;

use crate::constants::exit_codes;

#[derive(Debug)]
pub enum CliError {
    /// Missing plan, record, or reflection.
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput {
                message,
                hint: Some(hint),
            } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput { message, hint: None } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<TongdokError>() {
        Some(TongdokError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(TongdokError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::not_found("No reading plan", "Run `tongdok init`.");
        assert_eq!(err.to_string(), "No reading plan\nHint: Run `tongdok init`.");
        assert_eq!(CliError::invalid_input("bad month").to_string(), "bad month");
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(CliError::not_found("x", "y"));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid = anyhow::Error::new(TongdokError::InvalidInput("x".to_string()));
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let storage = anyhow::Error::new(TongdokError::Storage("x".to_string()));
        assert_eq!(exit_code_for(&storage), 1);

        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), 1);
    }
}
