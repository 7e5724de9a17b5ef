//! Error types for readme-locate

/// Result type for readme-locate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a README
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Path does not exist: {path}")]
    NotExist { path: String },

    #[error("Failed to list entries of {path}: {message}")]
    Listing { path: String, message: String },

    #[error("Cannot follow symbolic link {path}: {message}")]
    BrokenLink { path: String, message: String },

    #[error("Too many levels of symbolic links at {path}")]
    TooManyLinks { path: String },
}

impl Error {
    pub fn not_exist(path: impl Into<String>) -> Self {
        Self::NotExist { path: path.into() }
    }

    /// Whether this error only says that something is absent.
    ///
    /// Well-known directory fallback skips these instead of failing.
    pub fn is_not_exist(&self) -> bool {
        matches!(self, Self::NotExist { .. })
    }
}
