//! Error types for readme-git

/// Result type for readme-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readme-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Resolve(#[from] readme_locate::Error),

    #[error("Revision '{rev}' not found")]
    RevisionNotFound { rev: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Invalid tree path '{path}': leaves the repository root")]
    InvalidPath { path: String },
}
