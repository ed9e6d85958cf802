//! # Error Types
//!
//! Domain-specific error types for cartview-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartview-core errors (this file)                                      │
//! │  ├── CoreError        - Malformed or invalid state                     │
//! │  └── ValidationError  - Field-level rule failures                      │
//! │                                                                         │
//! │  cartview-render errors (separate crate)                               │
//! │  └── RenderError      - Template failures                              │
//! │                                                                         │
//! │  Flow: snapshot JSON → CoreError → anyhow chain in the binary          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selectors never return errors: a `State` that exists is well-formed.
//! Everything that can go wrong happens while building one.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while constructing or loading a [`State`](crate::State).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field is absent from a snapshot document.
    ///
    /// ## When This Occurs
    /// - The document has no `user` or no `cart`
    /// - A nested field is missing, e.g. `cart.items[1].price`
    ///
    /// The loader fails fast here instead of handing renderers partial data.
    #[error("Malformed state: missing field `{field}`")]
    MalformedState { field: String },

    /// Two items in one cart share a name.
    ///
    /// Item names are the display key for cart lines.
    #[error("Duplicate cart item name: {name}")]
    DuplicateItemName { name: String },

    /// An item price is below zero.
    #[error("Price of {item} must not be negative (got {cents} cents)")]
    NegativePrice { item: String, cents: i64 },

    /// The snapshot text is not valid JSON or has the wrong value types.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a non-finite number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value within a collection.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::MalformedState {
            field: "cart.items[0].price".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed state: missing field `cart.items[0].price`"
        );

        let err = CoreError::NegativePrice {
            item: "Cup".to_string(),
            cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "Price of Cup must not be negative (got -100 cents)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "user.name".to_string(),
        };
        assert_eq!(err.to_string(), "user.name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");

        let err = ValidationError::OutOfRange {
            field: "item.quantity".to_string(),
            min: 0,
            max: 9_999,
        };
        assert_eq!(err.to_string(), "item.quantity must be between 0 and 9999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
