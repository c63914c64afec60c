//! Error types for bootstrap and command handling.
//!
//! `AppError` is the top-level error type returned by bootstrap code and by
//! slash command handlers. Bootstrap errors abort the process; command errors
//! are logged by the dispatcher and never stop the bot. Backend failures stay
//! as `BackendError` and are turned into an apology by the ask flow.

pub mod backend;
pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Global tracing subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    LoggerErr(String),

    /// A slash command arrived without an option Discord marks as required.
    ///
    /// # Fields
    /// - Name of the missing option
    #[error("Command is missing required option '{0}'")]
    MissingOption(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
