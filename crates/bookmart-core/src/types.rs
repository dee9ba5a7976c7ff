//! # Domain Types
//!
//! Core domain types used throughout Bookmart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │      Book       │   │    Category     │   │     Rating      │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (BookId)    │   │  Fiction        │   │  tenths (u16)   │    │
//! │  │  title, author  │   │  Science        │   │  45 = 4.5★      │    │
//! │  │  price_cents    │   │  Fantasy ...    │   │  max 50 = 5.0★  │    │
//! │  │  rating         │   └─────────────────┘   └─────────────────┘    │
//! │  │  review_count   │                                                │
//! │  │  is_available   │   ┌─────────────────┐                          │
//! │  └─────────────────┘   │ CategoryFilter  │                          │
//! │                        │  All | Only(c)  │                          │
//! │                        └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Books are constructed once at startup from the seed list and never
//! mutated afterwards. Identifiers are unique across the catalog for the
//! lifetime of the process (enforced by `Catalog::new`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Book Identifier
// =============================================================================

/// Unique, stable book identifier.
///
/// ## Why a Newtype?
/// Prevents mixing book ids up with quantities or other integers at
/// compile time. The inner value is a positive integer assigned by the
/// seed list and stable for the process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BookId(pub u32);

impl BookId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of catalog categories.
///
/// The set is closed: screens render one tab per variant plus an "All"
/// tab (see [`CategoryFilter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fiction,
    Science,
    Fantasy,
    Biography,
    History,
    Romance,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Fiction,
        Category::Science,
        Category::Fantasy,
        Category::Biography,
        Category::History,
        Category::Romance,
    ];

    /// Returns the canonical display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Science => "Science",
            Category::Fantasy => "Fantasy",
            Category::Biography => "Biography",
            Category::History => "History",
            Category::Romance => "Romance",
        }
    }

    /// Parses a category label, case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use bookmart_core::types::Category;
    ///
    /// assert_eq!(Category::parse("fiction"), Some(Category::Fiction));
    /// assert_eq!(Category::parse("SCIENCE"), Some(Category::Science));
    /// assert_eq!(Category::parse("cooking"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// A category criterion: either the "all" sentinel or one specific category.
///
/// ## Why Not `Option<Category>`?
/// "All" is a first-class value the UI shows as its own tab, and it has
/// its own label at the string boundary. An explicit variant keeps the
/// sentinel from being confused with "no filter supplied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Keep every category (the sentinel).
    All,
    /// Keep only books in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter label, case-insensitively. `"all"` is the sentinel.
    pub fn parse(label: &str) -> Option<CategoryFilter> {
        if label.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(label).map(CategoryFilter::Only)
    }

    /// Checks whether a book's category passes this filter.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A star rating stored in tenths of a star.
///
/// ## Why Tenths?
/// 45 tenths = 4.5★. Integer tenths keep comparisons exact and sorting
/// total, the same reason prices are integer cents. The valid range is
/// 0..=50; construction is unchecked and range is enforced where ratings
/// enter the system (catalog construction, query validation).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rating(u16);

impl Rating {
    /// Maximum rating: 5.0 stars.
    pub const MAX: Rating = Rating(50);

    /// Creates a rating from tenths of a star (45 = 4.5★).
    #[inline]
    pub const fn from_tenths(tenths: u16) -> Self {
        Rating(tenths)
    }

    /// Returns the rating in tenths of a star.
    #[inline]
    pub const fn tenths(&self) -> u16 {
        self.0
    }

    /// Returns the rating in stars (for display only).
    #[inline]
    pub fn stars(&self) -> f32 {
        self.0 as f32 / 10.0
    }

    /// Zero rating.
    #[inline]
    pub const fn zero() -> Self {
        Rating(0)
    }

    /// Checks whether the rating lies inside the valid 0.0-5.0★ range.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 <= Rating::MAX.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::zero()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}★", self.stars())
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
///
/// Immutable after catalog construction: screens and the cart only ever
/// read from it. The cart snapshots the fields it needs (title, price)
/// rather than holding a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, stable for the process lifetime.
    pub id: BookId,

    /// Display title.
    pub title: String,

    /// Author name (searched together with the title).
    pub author: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Opaque cover image reference (URI); the core never dereferences it.
    pub cover_image: String,

    /// Catalog category.
    pub category: Category,

    /// Short description for the detail screen.
    pub description: String,

    /// Average review rating.
    pub rating: Rating,

    /// Number of reviews; doubles as the "bestselling" sort key.
    pub review_count: u32,

    /// Whether the book can currently be purchased.
    pub is_available: bool,
}

impl Book {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
