//! Command implementations for the hosp CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod appointments;
pub mod completions;
pub mod config;
pub mod departments;
pub mod doctors;
pub mod nurses;
pub mod patients;

use hospital_console_rs::forms::{FieldError, SubmitError};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// API error (server rejection, not found, transport).
    #[error("API error: {0}")]
    Api(#[from] hospital_api_rs::error::Error),

    /// Client-side validation failure; nothing was sent.
    #[error("{}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// A name could not be resolved to a record.
    #[error("{0}")]
    Lookup(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Interactive prompt failure.
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<SubmitError> for CommandError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => CommandError::Validation(errors),
            SubmitError::Api(api) => CommandError::Api(api),
        }
    }
}

impl CommandError {
    /// Exit code for the process: transport failures 3, everything else 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Api(api) => api.exit_code(),
            _ => 2,
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Asks the user to confirm a destructive action.
///
/// `--yes` and JSON mode skip the prompt (JSON callers are scripts).
pub fn confirm(ctx: &CommandContext, prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes || ctx.json_output {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_console_rs::forms::Field;

    #[test]
    fn validation_error_lists_every_message() {
        let err = CommandError::Validation(vec![
            FieldError {
                field: Field::Phone,
                message: "Enter a valid phone number!".to_string(),
            },
            FieldError {
                field: Field::Email,
                message: "Enter a valid email!".to_string(),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("phone number"));
        assert!(text.contains("email"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn submit_error_conversion_keeps_field_errors() {
        let err: CommandError = SubmitError::Invalid(vec![FieldError {
            field: Field::FromTime,
            message: "Enter a valid future from time!".to_string(),
        }])
        .into();
        assert!(matches!(err, CommandError::Validation(ref v) if v.len() == 1));
    }

    #[test]
    fn transport_errors_exit_3() {
        let err = CommandError::Api(hospital_api_rs::error::Error::Api(
            hospital_api_rs::error::ApiError::Network {
                message: "connection refused".to_string(),
            },
        ));
        assert_eq!(err.exit_code(), 3);
    }
}
