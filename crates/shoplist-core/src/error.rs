//! Error types for the shopping-list data layer.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all data-layer operations.
///
/// Duplicate product names are not errors; conflict-ignore inserts report
/// [`crate::provider::InsertOutcome::Ignored`].
#[derive(Error, Debug)]
pub enum ShopError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store was written by a newer build
    #[error("Store schema version {found} is newer than supported version {supported}")]
    SchemaVersion { found: i32, supported: i32 },
    /// The URI does not name one of the known tables or rows
    #[error("Unsupported URI: {uri}")]
    UnsupportedUri { uri: String },
    /// The URI is known but the operation cannot be applied to it
    #[error("Unsupported operation '{operation}' for URI {uri}")]
    UnsupportedOperation { operation: &'static str, uri: String },
    /// Values supplied for an insert or update are not acceptable
    #[error("Invalid value for column '{column}': {reason}")]
    InvalidValues { column: String, reason: String },
    /// A delete batch failed after `applied` rows were already removed
    #[error("Batch failed after deleting {applied} row(s): {source}")]
    BatchFailed {
        applied: usize,
        #[source]
        source: Box<ShopError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with context.
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
    pub fn with_source(self, source: rusqlite::Error) -> ShopError {
        ShopError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating value validation errors.
pub struct InvalidValuesBuilder {
    column: String,
}

impl InvalidValuesBuilder {
    /// Create a new invalid values error builder for a column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ShopError {
        ShopError::InvalidValues {
            column: self.column,
            reason: reason.into(),
        }
    }
}

impl ShopError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for value validation errors.
    pub fn invalid_values(column: impl Into<String>) -> InvalidValuesBuilder {
        InvalidValuesBuilder::new(column)
    }

    /// Creates an unsupported-operation error for the given URI.
    pub fn unsupported(operation: &'static str, uri: impl ToString) -> Self {
        Self::UnsupportedOperation {
            operation,
            uri: uri.to_string(),
        }
    }

    /// Wraps a tokio join failure from a blocking task.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ShopError::database(message).with_source(e))
    }
}

/// Result type alias for data-layer operations
pub type Result<T> = std::result::Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_message() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to run query").unwrap_err();
        assert!(matches!(err, ShopError::Database { .. }));
        assert!(err.to_string().contains("Failed to run query"));
    }

    #[test]
    fn test_batch_failure_reports_applied_count() {
        let err = ShopError::BatchFailed {
            applied: 2,
            source: Box::new(ShopError::UnsupportedUri {
                uri: "content://nope".to_string(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "Batch failed after deleting 2 row(s): Unsupported URI: content://nope"
        );
    }
}
