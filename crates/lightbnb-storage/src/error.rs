//! Storage error types for the LightBnB storage abstraction layer.
//!
//! Every storage operation reports failure through [`StorageError`], so callers
//! can tell "nothing matched" (`Ok(None)` / empty vector) apart from "the query
//! failed".

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("Record already exists: {entity} ({detail})")]
    AlreadyExists {
        /// The kind of record that collided.
        entity: String,
        /// Which constraint or value collided.
        detail: String,
    },

    /// The caller supplied input the store cannot accept.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of why the input is invalid.
        message: String,
    },

    /// Failed to reach the storage backend.
    #[error("Connection error: {message}")]
    ConnectionError {
        /// Description of the connection error.
        message: String,
    },

    /// The backend rejected or failed to execute a statement.
    #[error("Query error: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },

    /// An internal storage error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(entity: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            detail: detail.into(),
        }
    }

    /// Creates a new `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a new `ConnectionError` error.
    #[must_use]
    pub fn connection_error(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
        }
    }

    /// Creates a new `Query` error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::InvalidInput { .. } => ErrorCategory::Validation,
            Self::ConnectionError { .. } => ErrorCategory::Infrastructure,
            Self::Query { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of storage errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Uniqueness conflict.
    Conflict,
    /// Validation error.
    Validation,
    /// Infrastructure/connection error.
    Infrastructure,
    /// Internal or statement error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::already_exists("user", "email a@b.c");
        assert_eq!(err.to_string(), "Record already exists: user (email a@b.c)");

        let err = StorageError::invalid_input("limit must be > 0");
        assert_eq!(err.to_string(), "Invalid input: limit must be > 0");
    }

    #[test]
    fn test_error_predicates() {
        assert!(StorageError::already_exists("user", "email").is_already_exists());
        assert!(!StorageError::invalid_input("bad").is_already_exists());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            StorageError::already_exists("user", "email").category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            StorageError::invalid_input("bad").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            StorageError::connection_error("refused").category(),
            ErrorCategory::Infrastructure
        );
        assert_eq!(StorageError::query("syntax").category(), ErrorCategory::Internal);
        assert_eq!(ErrorCategory::Conflict.to_string(), "conflict");
    }
}
