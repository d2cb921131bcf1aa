//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while writing a view tree to an output format
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Errors returned by the strict `get_*` view queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unable to find an element matching {matcher}")]
    NotFound { matcher: String },

    #[error("Found {count} elements matching {matcher}, expected one")]
    MultipleFound { matcher: String, count: usize },
}
