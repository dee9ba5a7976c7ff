//! # Catalog Module
//!
//! The immutable in-memory catalog: the single source of truth for what
//! is on the shelf.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Lifecycle                               │
//! │                                                                     │
//! │  Process start                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Catalog::seeded() / Catalog::new(books)                            │
//! │       │        (validates every book, rejects duplicate ids)        │
//! │       ▼                                                             │
//! │  Shared read-only for the process lifetime                          │
//! │       │                                                             │
//! │       ├──► catalog.query(criteria)  → ordered Vec<Book>             │
//! │       └──► catalog.get(id)          → Option<&Book>                 │
//! │                                                                     │
//! │  Books are NEVER mutated after construction.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Book, BookId, Category, Rating};
use crate::validation::{validate_author, validate_price_cents, validate_title};

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, in-memory collection of purchasable books.
///
/// ## Invariants
/// - Book identifiers are unique (checked at construction)
/// - Every book passes field validation (checked at construction)
/// - Insertion order is preserved; it is the tie-break order for every
///   stable sort the query engine performs
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Builds a catalog from a seed list, validating every book.
    ///
    /// ## Errors
    /// - `ValidationError::Duplicate` if two books share an id
    /// - `ValidationError::Required` / `TooLong` / `OutOfRange` for bad
    ///   titles, authors, prices, or ratings
    pub fn new(books: Vec<Book>) -> CoreResult<Catalog> {
        let mut seen = HashSet::new();

        for book in &books {
            if !seen.insert(book.id) {
                return Err(ValidationError::Duplicate {
                    field: "book id".to_string(),
                    value: book.id.to_string(),
                }
                .into());
            }

            validate_title(&book.title)?;
            validate_author(&book.author)?;
            validate_price_cents(book.price_cents)?;

            if !book.rating.is_valid() {
                return Err(ValidationError::OutOfRange {
                    field: "rating".to_string(),
                    min: 0,
                    max: Rating::MAX.tenths() as i64,
                }
                .into());
            }
        }

        Ok(Catalog { books })
    }

    /// Looks up a book by id.
    ///
    /// An absent id is an explicit `None`, never an error escaping the
    /// boundary.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns all books in catalog order.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books.
    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Checks whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over all books in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Builds the fixed development/demo catalog.
    ///
    /// The seed list is hand-curated rather than generated: it is small
    /// enough to eyeball in the demo session and deliberately covers
    /// every category, a spread of prices and ratings, shared sort keys
    /// (for stability checks), and one unavailable title.
    pub fn seeded() -> Catalog {
        let books = seed_books();
        // The seed list is internally consistent; a failure here is a
        // programming error in the seed table itself.
        Catalog::new(books).expect("seed catalog must be valid")
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// Compact row form for the seed table below.
struct SeedRow {
    id: u32,
    title: &'static str,
    author: &'static str,
    price_cents: i64,
    category: Category,
    description: &'static str,
    rating_tenths: u16,
    review_count: u32,
    is_available: bool,
}

impl SeedRow {
    fn into_book(self) -> Book {
        Book {
            id: BookId(self.id),
            title: self.title.to_string(),
            author: self.author.to_string(),
            price_cents: self.price_cents,
            cover_image: format!("assets/covers/{:03}.jpg", self.id),
            category: self.category,
            description: self.description.to_string(),
            rating: Rating::from_tenths(self.rating_tenths),
            review_count: self.review_count,
            is_available: self.is_available,
        }
    }
}

/// The fixed seed list for the demo storefront.
fn seed_books() -> Vec<Book> {
    use Category::*;

    let rows = vec![
        SeedRow {
            id: 1,
            title: "The Silent Orchard",
            author: "N. K. Calloway",
            price_cents: 1499,
            category: Fiction,
            description: "A family drama unfolding over three harvests in rural Vermont.",
            rating_tenths: 45,
            review_count: 1240,
            is_available: true,
        },
        SeedRow {
            id: 2,
            title: "Glasshouse Summer",
            author: "Irene Voss",
            price_cents: 1099,
            category: Fiction,
            description: "Two estranged sisters inherit a ruined conservatory.",
            rating_tenths: 38,
            review_count: 412,
            is_available: true,
        },
        SeedRow {
            id: 3,
            title: "The Cartographer's Daughter",
            author: "Miguel Arantes",
            price_cents: 1299,
            category: Fiction,
            description: "A mapmaker's apprentice charts a coastline that keeps changing.",
            rating_tenths: 45,
            review_count: 890,
            is_available: true,
        },
        SeedRow {
            id: 4,
            title: "Entangled: A Quantum Primer",
            author: "Dr. Priya Raman",
            price_cents: 2199,
            category: Science,
            description: "Quantum mechanics for readers who hated their physics class.",
            rating_tenths: 47,
            review_count: 2034,
            is_available: true,
        },
        SeedRow {
            id: 5,
            title: "The Deep Field",
            author: "Anders Lindqvist",
            price_cents: 1899,
            category: Science,
            description: "What the darkest patch of sky taught us about the early universe.",
            rating_tenths: 42,
            review_count: 756,
            is_available: true,
        },
        SeedRow {
            id: 6,
            title: "Soil: A Biography",
            author: "Hana Okafor",
            price_cents: 1599,
            category: Science,
            description: "The unglamorous chemistry keeping every ecosystem alive.",
            rating_tenths: 40,
            review_count: 315,
            is_available: false,
        },
        SeedRow {
            id: 7,
            title: "The Emberwright",
            author: "Saoirse Quill",
            price_cents: 1399,
            category: Fantasy,
            description: "A smith who forges memories into steel takes a forbidden commission.",
            rating_tenths: 49,
            review_count: 3521,
            is_available: true,
        },
        SeedRow {
            id: 8,
            title: "Ninth Gate of Varesh",
            author: "Tomas Drell",
            price_cents: 1399,
            category: Fantasy,
            description: "The final volume of the Gatewalker cycle.",
            rating_tenths: 44,
            review_count: 1877,
            is_available: true,
        },
        SeedRow {
            id: 9,
            title: "A Lighthouse Mind",
            author: "Celeste Marchetti",
            price_cents: 1799,
            category: Biography,
            description: "The life of engineer and lighthouse keeper Ada Brodie.",
            rating_tenths: 43,
            review_count: 528,
            is_available: true,
        },
        SeedRow {
            id: 10,
            title: "The Salt Roads of Anatolia",
            author: "Deniz Karabulut",
            price_cents: 2099,
            category: History,
            description: "Trade, taxation, and empire along the old salt routes.",
            rating_tenths: 41,
            review_count: 198,
            is_available: true,
        },
        SeedRow {
            id: 11,
            title: "Winter Counts of the Plains",
            author: "Robert High Elk",
            price_cents: 1699,
            category: History,
            description: "Reading a century of Lakota pictographic calendars.",
            rating_tenths: 46,
            review_count: 604,
            is_available: true,
        },
        SeedRow {
            id: 12,
            title: "Postmark, Paris",
            author: "Eloise Brandt",
            price_cents: 999,
            category: Romance,
            description: "A dead-letter clerk falls for the sender of an unsendable letter.",
            rating_tenths: 36,
            review_count: 2289,
            is_available: true,
        },
        SeedRow {
            id: 13,
            title: "The Beekeeper's Wager",
            author: "Gwen Holloway",
            price_cents: 1199,
            category: Romance,
            description: "Rival apiarists, one county fair, and a bet neither can afford to lose.",
            rating_tenths: 42,
            review_count: 1103,
            is_available: true,
        },
        SeedRow {
            id: 14,
            title: "Orbital Decay",
            author: "Irene Voss",
            price_cents: 1599,
            category: Fiction,
            description: "A space-station caretaker watches the last crews leave.",
            rating_tenths: 42,
            review_count: 967,
            is_available: true,
        },
    ];

    rows.into_iter().map(SeedRow::into_book).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_book(id: u32, title: &str) -> Book {
        Book {
            id: BookId(id),
            title: title.to_string(),
            author: "Test Author".to_string(),
            price_cents: 1000,
            cover_image: String::new(),
            category: Category::Fiction,
            description: String::new(),
            rating: Rating::from_tenths(40),
            review_count: 10,
            is_available: true,
        }
    }

    #[test]
    fn test_seeded_catalog_is_valid() {
        let catalog = Catalog::seeded();
        assert!(!catalog.is_empty());

        // Every category is represented
        for category in Category::ALL {
            assert!(
                catalog.iter().any(|b| b.category == category),
                "no seed book in {:?}",
                category
            );
        }

        // At least one unavailable title for availability-policy tests
        assert!(catalog.iter().any(|b| !b.is_available));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seeded();
        let first = &catalog.books()[0];

        assert_eq!(catalog.get(first.id).unwrap().title, first.title);
        assert!(catalog.get(BookId(999_999)).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let books = vec![test_book(1, "One"), test_book(1, "Also One")];
        let err = Catalog::new(books);
        assert!(matches!(
            err,
            Err(crate::CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_invalid_book_rejected() {
        let mut book = test_book(1, "Bad Price");
        book.price_cents = -5;
        assert!(Catalog::new(vec![book]).is_err());

        let mut book = test_book(2, "Bad Rating");
        book.rating = Rating::from_tenths(60);
        assert!(Catalog::new(vec![book]).is_err());

        let book = test_book(3, "");
        assert!(Catalog::new(vec![book]).is_err());
    }
}
