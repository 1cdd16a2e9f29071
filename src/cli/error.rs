//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::level::LevelError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Level(#[from] LevelError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Level(e) => match e {
                LevelError::FileRead(_) => exitcode::NOINPUT,
                LevelError::LevelNotFound(_) => exitcode::USAGE,
                LevelError::UnknownTag(_)
                | LevelError::ChildrenNotAllowed(_)
                | LevelError::InvalidFormat(_) => exitcode::DATAERR,
            },
            CliError::Settings(_) => exitcode::CONFIG,
        }
    }
}
