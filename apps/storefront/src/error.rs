//! # Store Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bookmart                           │
//! │                                                                     │
//! │  Presentation              Command Layer                            │
//! │  ────────────              ─────────────                            │
//! │                                                                     │
//! │  browse_catalog(request)                                            │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌────────────────────────────────────────────────────────────┐    │
//! │  │  Command Function: Result<T, StoreError>                   │    │
//! │  │         │                                                  │    │
//! │  │  Parse error? ── unknown category/sort label ──┐           │    │
//! │  │         │                                      ▼           │    │
//! │  │  Core error? ──── CoreError::... ───────── StoreError ───► │    │
//! │  │         │                                                  │    │
//! │  │  Success ────────────────────────────────────────────────► │    │
//! │  └────────────────────────────────────────────────────────────┘    │
//! │                                                                     │
//! │  The presentation layer decides user-visible messaging              │
//! │  (e.g. "no books found"); the command layer only reports            │
//! │  machine-readable codes plus human-readable context.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use bookmart_core::{BookId, CoreError};

/// Error returned from storefront commands.
///
/// ## Serialization
/// This is what the presentation layer receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Payment processing error
    PaymentError,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: BookId) -> Self {
        StoreError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::CartError, message)
    }

    /// Creates a payment error.
    pub fn payment(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::PaymentError, message)
    }
}

/// Converts core errors to store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => StoreError::not_found("Book", id),
            CoreError::LineNotFound(id) => {
                StoreError::new(ErrorCode::CartError, format!("No cart line for book {}", id))
            }
            CoreError::InvalidPriceRange { .. } | CoreError::RatingOutOfRange { .. } => {
                StoreError::validation(err.to_string())
            }
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                StoreError::cart(err.to_string())
            }
            CoreError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}
