//! # Catalog Query Engine
//!
//! Filter, free-text search, and sort over the immutable catalog.
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Query Flow                                   │
//! │                                                                     │
//! │  UI filter/sort/search state changes                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  QueryCriteria { category, price range, min rating, text, sort }    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  catalog.query(&criteria)                                           │
//! │       │                                                             │
//! │       ├── validate criteria (reject bad range / rating / text)      │
//! │       ├── filter: AND of all specified predicates                   │
//! │       ├── stable sort by the requested order                        │
//! │       └── return a fresh Vec<Book> (input never mutated)            │
//! │                                                                     │
//! │  Predicates are pure functions of (book, criteria): no side         │
//! │  effects, no dependency on evaluation order.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Book, CategoryFilter, Rating};
use crate::validation::{validate_min_rating, validate_price_range, validate_search_text};

// =============================================================================
// Sort Order
// =============================================================================

/// The orderings a screen can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Most reviewed first; review count is the bestselling proxy.
    BestsellingDesc,
    /// Catalog order. The catalog carries no creation timestamp, so
    /// "newest" deliberately preserves the filtered order (see DESIGN.md).
    Newest,
}

impl SortOrder {
    /// Parses a sort label, case-insensitively. Accepts both camelCase
    /// (`"priceAsc"`) and snake_case (`"price_asc"`) spellings, since the
    /// boundary DTOs historically used the former.
    pub fn parse(label: &str) -> Option<SortOrder> {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "priceasc" => Some(SortOrder::PriceAsc),
            "pricedesc" => Some(SortOrder::PriceDesc),
            "ratingdesc" => Some(SortOrder::RatingDesc),
            "bestsellingdesc" | "bestselling" => Some(SortOrder::BestsellingDesc),
            "newest" => Some(SortOrder::Newest),
            _ => None,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

// =============================================================================
// Query Criteria
// =============================================================================

/// The combined filter/sort/search parameters for one query.
///
/// ## Defaults
/// The default criteria match the whole catalog: all categories, full
/// price range, zero minimum rating, empty search, catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryCriteria {
    /// Category filter; `CategoryFilter::All` is the sentinel.
    pub category: CategoryFilter,

    /// Inclusive lower price bound.
    pub price_min: Money,

    /// Inclusive upper price bound.
    pub price_max: Money,

    /// Keep books with rating >= this value.
    pub min_rating: Rating,

    /// Case-insensitive substring over title OR author; empty means no
    /// text filtering.
    pub search_text: String,

    /// Stable sort applied after filtering.
    pub sort: SortOrder,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        QueryCriteria {
            category: CategoryFilter::All,
            price_min: Money::zero(),
            price_max: Money::from_cents(i64::MAX),
            min_rating: Rating::zero(),
            search_text: String::new(),
            sort: SortOrder::default(),
        }
    }
}

impl QueryCriteria {
    /// Validates the criteria, rejecting bad input at the query boundary.
    ///
    /// ## Errors
    /// - `InvalidPriceRange` if min > max or a bound is negative
    /// - `RatingOutOfRange` if the minimum rating exceeds 5.0★
    /// - `Validation(TooLong)` if the search text is oversized
    pub fn validate(&self) -> CoreResult<()> {
        validate_price_range(self.price_min, self.price_max)?;
        validate_min_rating(self.min_rating)?;
        validate_search_text(&self.search_text)?;
        Ok(())
    }
}

// =============================================================================
// Predicate
// =============================================================================

/// The combined filter predicate: logical AND of every specified
/// criterion. Pure function of (book, criteria); `needle` is the search
/// text pre-lowercased by the caller so the per-book work stays cheap.
fn matches(book: &Book, criteria: &QueryCriteria, needle: &str) -> bool {
    if !criteria.category.matches(book.category) {
        return false;
    }

    if book.price() < criteria.price_min || book.price() > criteria.price_max {
        return false;
    }

    if book.rating < criteria.min_rating {
        return false;
    }

    if !needle.is_empty() {
        let title_hit = book.title.to_lowercase().contains(needle);
        let author_hit = book.author.to_lowercase().contains(needle);
        if !title_hit && !author_hit {
            return false;
        }
    }

    true
}

// =============================================================================
// Query
// =============================================================================

impl Catalog {
    /// Runs a query against the catalog: filter, then stable sort.
    ///
    /// ## Guarantees
    /// - The result is always a subset of the catalog (no items invented)
    /// - The catalog itself is never mutated; a fresh `Vec<Book>` is
    ///   returned
    /// - Sorting is stable: equal sort keys preserve relative catalog
    ///   order, so results are deterministic and testable
    ///
    /// ## Errors
    /// Invalid criteria are rejected up front (see
    /// [`QueryCriteria::validate`]); filtering and sorting themselves
    /// cannot fail.
    pub fn query(&self, criteria: &QueryCriteria) -> CoreResult<Vec<Book>> {
        criteria.validate()?;

        // Lowercase the needle once, not per book.
        let needle = validate_search_text(&criteria.search_text)?.to_lowercase();

        let mut results: Vec<Book> = self
            .iter()
            .filter(|book| matches(book, criteria, &needle))
            .cloned()
            .collect();

        // Vec::sort_by is a stable sort; ties keep catalog order.
        match criteria.sort {
            SortOrder::PriceAsc => results.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
            SortOrder::PriceDesc => results.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
            SortOrder::RatingDesc => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortOrder::BestsellingDesc => {
                results.sort_by(|a, b| b.review_count.cmp(&a.review_count))
            }
            // No creation timestamp exists; keep filtered (catalog) order.
            SortOrder::Newest => {}
        }

        Ok(results)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookId, Category};

    fn book(id: u32, price_cents: i64, rating_tenths: u16, category: Category) -> Book {
        Book {
            id: BookId(id),
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            price_cents,
            cover_image: String::new(),
            category,
            description: String::new(),
            rating: Rating::from_tenths(rating_tenths),
            review_count: id * 10,
            is_available: true,
        }
    }

    fn two_book_catalog() -> Catalog {
        // The concrete scenario from the product requirements:
        // id 1: $10.00, 4.5★, Fiction; id 2: $20.00, 3.0★, Science.
        Catalog::new(vec![
            book(1, 1000, 45, Category::Fiction),
            book(2, 2000, 30, Category::Science),
        ])
        .unwrap()
    }

    #[test]
    fn test_category_filter_scenario() {
        let catalog = two_book_catalog();
        let criteria = QueryCriteria {
            category: CategoryFilter::Only(Category::Fiction),
            price_min: Money::zero(),
            price_max: Money::from_cents(10_000),
            min_rating: Rating::zero(),
            search_text: String::new(),
            sort: SortOrder::PriceAsc,
        };

        let results = catalog.query(&criteria).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, BookId(1));
    }

    #[test]
    fn test_default_criteria_returns_whole_catalog() {
        let catalog = Catalog::seeded();
        let results = catalog.query(&QueryCriteria::default()).unwrap();

        assert_eq!(results.len(), catalog.len());
        // Newest is a no-op ordering: catalog order preserved
        let ids: Vec<BookId> = results.iter().map(|b| b.id).collect();
        let expected: Vec<BookId> = catalog.iter().map(|b| b.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_results_are_subset_matching_all_predicates() {
        let catalog = Catalog::seeded();
        let criteria = QueryCriteria {
            category: CategoryFilter::Only(Category::Fiction),
            price_min: Money::from_cents(1000),
            price_max: Money::from_cents(1500),
            min_rating: Rating::from_tenths(40),
            search_text: String::new(),
            sort: SortOrder::RatingDesc,
        };

        let results = catalog.query(&criteria).unwrap();
        assert!(!results.is_empty());

        for b in &results {
            // Subset of the catalog: same book exists under the same id
            assert_eq!(catalog.get(b.id).unwrap().title, b.title);

            assert_eq!(b.category, Category::Fiction);
            assert!(b.price_cents >= 1000 && b.price_cents <= 1500);
            assert!(b.rating >= Rating::from_tenths(40));
        }
    }

    #[test]
    fn test_price_range_is_inclusive_both_ends() {
        let catalog = two_book_catalog();
        let criteria = QueryCriteria {
            price_min: Money::from_cents(1000),
            price_max: Money::from_cents(2000),
            ..QueryCriteria::default()
        };

        let results = catalog.query(&criteria).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_matches_title_or_author_case_insensitive() {
        let catalog = Catalog::seeded();

        let criteria = QueryCriteria {
            search_text: "VOSS".to_string(),
            ..QueryCriteria::default()
        };
        let by_author = catalog.query(&criteria).unwrap();
        assert!(!by_author.is_empty());
        assert!(by_author.iter().all(|b| b.author.contains("Voss")));

        let criteria = QueryCriteria {
            search_text: "emberwright".to_string(),
            ..QueryCriteria::default()
        };
        let by_title = catalog.query(&criteria).unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "The Emberwright");

        // Empty search applies no text filter
        let criteria = QueryCriteria::default();
        assert_eq!(catalog.query(&criteria).unwrap().len(), catalog.len());
    }

    #[test]
    fn test_sort_orders() {
        let catalog = Catalog::seeded();

        let asc = catalog
            .query(&QueryCriteria {
                sort: SortOrder::PriceAsc,
                ..QueryCriteria::default()
            })
            .unwrap();
        assert!(asc.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));

        let desc = catalog
            .query(&QueryCriteria {
                sort: SortOrder::PriceDesc,
                ..QueryCriteria::default()
            })
            .unwrap();
        assert!(desc.windows(2).all(|w| w[0].price_cents >= w[1].price_cents));

        let rating = catalog
            .query(&QueryCriteria {
                sort: SortOrder::RatingDesc,
                ..QueryCriteria::default()
            })
            .unwrap();
        assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let bestselling = catalog
            .query(&QueryCriteria {
                sort: SortOrder::BestsellingDesc,
                ..QueryCriteria::default()
            })
            .unwrap();
        assert!(bestselling
            .windows(2)
            .all(|w| w[0].review_count >= w[1].review_count));
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        // Three books sharing a price; catalog order must survive the sort
        let catalog = Catalog::new(vec![
            book(10, 1399, 40, Category::Fantasy),
            book(11, 999, 40, Category::Fiction),
            book(12, 1399, 40, Category::Fantasy),
            book(13, 1399, 40, Category::History),
        ])
        .unwrap();

        let results = catalog
            .query(&QueryCriteria {
                sort: SortOrder::PriceAsc,
                ..QueryCriteria::default()
            })
            .unwrap();

        let ids: Vec<u32> = results.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![11, 10, 12, 13]);

        // Equal ratings everywhere: RatingDesc must be the identity order
        let results = catalog
            .query(&QueryCriteria {
                sort: SortOrder::RatingDesc,
                ..QueryCriteria::default()
            })
            .unwrap();
        let ids: Vec<u32> = results.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_invalid_range_rejected_not_empty() {
        let catalog = Catalog::seeded();

        let criteria = QueryCriteria {
            price_min: Money::from_cents(2000),
            price_max: Money::from_cents(1000),
            ..QueryCriteria::default()
        };
        assert!(matches!(
            catalog.query(&criteria),
            Err(crate::CoreError::InvalidPriceRange { .. })
        ));

        let criteria = QueryCriteria {
            min_rating: Rating::from_tenths(51),
            ..QueryCriteria::default()
        };
        assert!(matches!(
            catalog.query(&criteria),
            Err(crate::CoreError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_combined_predicates_are_an_and() {
        let catalog = Catalog::seeded();

        // Search "the" alone matches titles in several categories; adding
        // a category criterion must intersect, not replace.
        let search_only = QueryCriteria {
            search_text: "the".to_string(),
            ..QueryCriteria::default()
        };
        let broad = catalog.query(&search_only).unwrap();
        assert!(broad.iter().any(|b| b.category != Category::History));

        let criteria = QueryCriteria {
            category: CategoryFilter::Only(Category::History),
            search_text: "the".to_string(),
            ..QueryCriteria::default()
        };
        let narrowed = catalog.query(&criteria).unwrap();
        assert!(!narrowed.is_empty());
        assert!(narrowed.len() < broad.len());
        assert!(narrowed.iter().all(|b| {
            b.category == Category::History
                && (b.title.to_lowercase().contains("the")
                    || b.author.to_lowercase().contains("the"))
        }));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("priceAsc"), Some(SortOrder::PriceAsc));
        assert_eq!(SortOrder::parse("price_desc"), Some(SortOrder::PriceDesc));
        assert_eq!(SortOrder::parse("RATINGDESC"), Some(SortOrder::RatingDesc));
        assert_eq!(
            SortOrder::parse("bestselling"),
            Some(SortOrder::BestsellingDesc)
        );
        assert_eq!(SortOrder::parse(" newest "), Some(SortOrder::Newest));
        assert_eq!(SortOrder::parse("alphabetical"), None);
    }
}
