//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ItemId, PostId, TagId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Tag not found: {0}")]
    TagNotFound(TagId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::TagNotFound(_) => "UNKNOWN_TAG",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::ItemNotFound(_)
                | Self::TagNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidId(_) | Self::ContentTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(UserId::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::DatabaseError("connection reset".to_string());
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(PostId::new(1)).is_not_found());
        assert!(!DomainError::DatabaseError("x".to_string()).is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::ContentTooLong { max: 280 }.is_validation());
        assert!(!DomainError::UserNotFound(UserId::new(1)).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PostNotFound(PostId::new(123));
        assert_eq!(err.to_string(), "Post not found: 123");
    }
}
