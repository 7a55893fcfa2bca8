//! Error types for the data services

use thiserror::Error;

/// Result type for data service operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in data service operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the given id
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The backing store cannot be reached
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl StoreError {
    /// Create a not-found error
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error means the entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::not_found("task", 42);
        assert_eq!(err.to_string(), "task not found: 42");
    }

    #[test]
    fn test_invalid_value() {
        let err = StoreError::invalid_value("status", "unknown status 'blocked'");
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::not_found("user", 1).is_not_found());
        assert!(!StoreError::unavailable("offline").is_not_found());
    }
}
