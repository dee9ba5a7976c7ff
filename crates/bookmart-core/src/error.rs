//! # Error Types
//!
//! Domain-specific error types for bookmart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bookmart-core errors (this file)                                   │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  storefront errors (in app)                                         │
//! │  └── StoreError       - What the presentation layer sees            │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Presentation      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, bounds, etc.)
//! 3. Errors are enum variants, never String
//! 4. Validation failures are returned as values, never used for control
//!    flow past the boundary

use thiserror::Error;

use crate::types::BookId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic
/// failures. They should be caught and translated to user-friendly
/// messages by the presentation layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Book cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// Plain catalog lookups return `Option` and never raise this; it is
    /// for operations that require the book to exist (e.g. adding a book
    /// id to the cart through the command layer).
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// No cart line exists for the given book id.
    ///
    /// Raised by `Cart::update_quantity` on an id that was never added.
    /// Removing a missing line is a silent no-op instead.
    #[error("No cart line for book {0}")]
    LineNotFound(BookId),

    /// Price range has min > max, or a negative bound.
    ///
    /// Rejected at the query boundary rather than silently returning an
    /// empty or nonsensical result set.
    #[error("Invalid price range: {min_cents} > {max_cents} (cents)")]
    InvalidPriceRange { min_cents: i64, max_cents: i64 },

    /// Minimum rating outside the valid 0.0-5.0★ range.
    #[error("Rating out of range: {tenths} tenths (max 50)")]
    RatingOutOfRange { tenths: u16 },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate book id in the seed list).
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
        let err = CoreError::BookNotFound(BookId(42));
        assert_eq!(err.to_string(), "Book not found: 42");

        let err = CoreError::InvalidPriceRange {
            min_cents: 2000,
            max_cents: 1000,
        };
        assert_eq!(err.to_string(), "Invalid price range: 2000 > 1000 (cents)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::TooLong {
            field: "search".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "search must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "author".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
