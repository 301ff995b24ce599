//! Error types for the PostgreSQL storage backend.

use lightbnb_search::SqlBuilderError;
use lightbnb_storage::StorageError;
use sqlx_core::error::Error as SqlxError;

/// Errors specific to the PostgreSQL storage backend.
#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    /// Database driver or server error.
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    /// The search statement could not be built.
    #[error("Query build error: {0}")]
    Build(#[from] SqlBuilderError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PostgresError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<PostgresError> for StorageError {
    fn from(err: PostgresError) -> Self {
        match err {
            PostgresError::Database(e) => sqlx_to_storage(e),
            PostgresError::Build(e) => StorageError::invalid_input(e.to_string()),
            PostgresError::Config { message } => {
                StorageError::internal(format!("Configuration error: {message}"))
            }
        }
    }
}

/// Maps a driver error onto the storage taxonomy.
fn sqlx_to_storage(err: SqlxError) -> StorageError {
    match &err {
        SqlxError::Database(db_err) if db_err.is_unique_violation() => StorageError::already_exists(
            db_err.table().unwrap_or("record"),
            db_err.constraint().unwrap_or("unique constraint"),
        ),
        SqlxError::Database(db_err) if db_err.is_foreign_key_violation() => {
            StorageError::invalid_input(db_err.message().to_string())
        }
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => StorageError::connection_error(err.to_string()),
        _ => StorageError::query(err.to_string()),
    }
}

/// Result type alias for PostgreSQL operations.
pub type Result<T> = std::result::Result<T, PostgresError>;
