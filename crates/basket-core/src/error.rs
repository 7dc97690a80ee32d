//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Basket rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  basket-db errors (separate crate)                                     │
//! │  └── DbError          - Store operation failures                       │
//! │                                                                         │
//! │  basket-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                         DbError ────┴──► ApiError → HTTP response      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A basket was submitted without any items.
    ///
    /// Checked before item validation and before the store is touched, so
    /// an empty basket never reaches persistence.
    #[error("Basket is empty")]
    EmptyBasket,

    /// An item failed its name, price or quantity rules.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Arithmetic on the value left the representable range.
    #[error("{field} is too large")]
    Overflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyBasket.to_string(), "Basket is empty");

        let err = CoreError::InvalidItem(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid item: quantity must be positive");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidItem(_)));
    }
}
