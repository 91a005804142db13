//! Error types for the gare library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for storage and favorites operations.
#[derive(Error, Debug)]
pub enum GareError {
    /// SQLite connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The backing storage slot could not be used.
    ///
    /// Returned by [`Storage`](crate::Storage) implementations that are not
    /// SQLite based, e.g. a remote or quota-limited key/value store, when a
    /// slot is temporarily unavailable.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Compact timestamp parsing errors
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Rejection reasons for a compact `YYYYMMDDThhmmss` timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected 15 characters in compact timestamp, found {0}")]
    Length(usize),
    #[error("expected 'T' separator at position 8 of compact timestamp")]
    MissingSeparator,
    #[error("expected a digit at position {0} of compact timestamp")]
    NotADigit(usize),
    #[error("compact timestamp does not name a valid UTC date and time: {0}")]
    OutOfRange(String),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GareError {
        GareError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GareError {
        GareError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GareError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GareError::database(message).with_source(e))
    }
}

/// Result type alias for gare operations
pub type Result<T> = std::result::Result<T, GareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = GareError::invalid_input("id").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'id': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read slot").unwrap_err();
        assert!(matches!(err, GareError::Database { .. }));
        assert!(err.to_string().contains("Failed to read slot"));
    }

    #[test]
    fn test_timestamp_error_is_transparent() {
        let err: GareError = TimestampError::Length(3).into();
        assert_eq!(
            err.to_string(),
            "expected 15 characters in compact timestamp, found 3"
        );
    }
}
