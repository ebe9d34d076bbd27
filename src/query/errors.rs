//! # Query Errors

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised by the query layer
///
/// `Display` output is surfaced verbatim to HTTP clients in 500 responses.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The database file could not be opened or is not a SQLite database
    #[error("Failed to open database at {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// No connection is held (startup failure or closed at shutdown)
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Statement preparation or execution failed
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking query task panicked or was cancelled
    #[error("Query task failed: {0}")]
    Task(String),

    /// A previous query panicked while holding the connection
    #[error("Database connection lock poisoned")]
    Poisoned,
}
