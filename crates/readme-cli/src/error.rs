//! Error types for readme-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from readme-git
    #[error(transparent)]
    Git(#[from] readme_git::Error),

    /// Repository could not be opened
    #[error("Not a git repository: {path} ({source})")]
    Repository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Failed to load config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// JSON output failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
