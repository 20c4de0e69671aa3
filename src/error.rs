use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file logger could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Invalid path provided at startup.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The path exists but is not a directory (or does not exist at all).
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory could not be opened for listing.
    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    /// A file could not be opened for viewing.
    #[error("Cannot open {}: {source}", path.display())]
    FileLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
