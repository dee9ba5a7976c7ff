//! # bookmart-core: Pure Business Logic for Bookmart
//!
//! This crate is the **heart** of Bookmart. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bookmart Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (UI)                    │   │
//! │  │    Browse Grid ──► Book Detail ──► Cart ──► Checkout        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ in-process calls                   │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                 Storefront Commands (app)                   │   │
//! │  │    browse_catalog, add_to_cart, checkout, etc.              │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ bookmart-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────┐ ┌──────────┐ │   │
//! │  │  │  types  │ │ catalog │ │  query  │ │ cart │ │validation│ │   │
//! │  │  │  Book   │ │ Catalog │ │Criteria │ │ Cart │ │  rules   │ │   │
//! │  │  │ Rating  │ │  seed   │ │  sort   │ │ Line │ │  checks  │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────┘ └──────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Category, Rating, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable in-memory catalog
//! - [`query`] - Filter / search / sort engine over the catalog
//! - [`cart`] - Cart aggregator (lines, quantities, running total)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookmart_core::{Cart, Catalog, QueryCriteria, SortOrder};
//!
//! let catalog = Catalog::seeded();
//!
//! // Browse: cheapest fiction first
//! let mut criteria = QueryCriteria::default();
//! criteria.sort = SortOrder::PriceAsc;
//! let results = catalog.query(&criteria).unwrap();
//!
//! // Add the first result to a cart
//! let mut cart = Cart::new();
//! cart.add(&results[0]).unwrap();
//! assert_eq!(cart.total(), results[0].price());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookmart_core::Cart` instead of
// `use bookmart_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{QueryCriteria, SortOrder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
/// Can be made configurable per-store in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single book in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum length of a free-text search query, in characters
pub const MAX_SEARCH_LEN: usize = 100;
