//! # Validation Module
//!
//! Input validation utilities for Bookmart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (UI)                                         │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Command layer (storefront app)                            │
//! │  ├── DTO parsing (unknown category/sort labels)                     │
//! │  └── THIS MODULE: business rule validation                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Core operations                                           │
//! │  └── Invariants enforced structurally (one line per book, etc.)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookmart_core::validation::{validate_quantity, validate_search_text};
//!
//! // Validate quantity before a cart operation
//! validate_quantity(5).unwrap();
//!
//! // Validate (and trim) a search query
//! let query = validate_search_text("  dune  ").unwrap();
//! assert_eq!(query, "dune");
//! ```

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::types::Rating;
use crate::{MAX_LINE_QUANTITY, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an author name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 120 characters
pub fn validate_author(author: &str) -> ValidationResult<()> {
    let author = author.trim();

    if author.is_empty() {
        return Err(ValidationError::Required {
            field: "author".to_string(),
        });
    }

    if author.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "author".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (no text filtering is applied)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_text(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// Zero and negative quantities are not "invalid" at the cart boundary —
/// they mean removal — so this validator is for contexts where a real
/// quantity is required.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, promotional copies)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Query Boundary Validators
// =============================================================================

/// Validates a price range criterion.
///
/// ## Rules
/// - Both bounds must be non-negative
/// - min must not exceed max
///
/// A bad range is rejected at the query boundary rather than silently
/// returning an empty result set.
pub fn validate_price_range(min: Money, max: Money) -> Result<(), CoreError> {
    if min.is_negative() || max.is_negative() || min > max {
        return Err(CoreError::InvalidPriceRange {
            min_cents: min.cents(),
            max_cents: max.cents(),
        });
    }

    Ok(())
}

/// Validates a minimum-rating criterion (must lie within 0.0-5.0★).
pub fn validate_min_rating(rating: Rating) -> Result<(), CoreError> {
    if !rating.is_valid() {
        return Err(CoreError::RatingOutOfRange {
            tenths: rating.tenths(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("The Silent Orchard").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_author() {
        assert!(validate_author("N. K. Calloway").is_ok());
        assert!(validate_author("").is_err());
        assert!(validate_author(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_search_text() {
        assert_eq!(validate_search_text("  dune ").unwrap(), "dune");
        assert_eq!(validate_search_text("").unwrap(), "");
        assert!(validate_search_text(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1299).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_price_range() {
        assert!(validate_price_range(Money::zero(), Money::from_cents(10000)).is_ok());
        assert!(validate_price_range(Money::from_cents(500), Money::from_cents(500)).is_ok());

        let err = validate_price_range(Money::from_cents(2000), Money::from_cents(1000));
        assert!(matches!(err, Err(CoreError::InvalidPriceRange { .. })));

        let err = validate_price_range(Money::from_cents(-1), Money::from_cents(1000));
        assert!(matches!(err, Err(CoreError::InvalidPriceRange { .. })));
    }

    #[test]
    fn test_validate_min_rating() {
        assert!(validate_min_rating(Rating::zero()).is_ok());
        assert!(validate_min_rating(Rating::MAX).is_ok());
        assert!(matches!(
            validate_min_rating(Rating::from_tenths(51)),
            Err(CoreError::RatingOutOfRange { tenths: 51 })
        ));
    }
}
