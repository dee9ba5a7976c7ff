//! # Catalog Commands
//!
//! Browse, search, and single-book lookup.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Browse Flow                             │
//! │                                                                     │
//! │  User changes a filter tab, the price slider, or the search box     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  browse_catalog(catalog, BrowseRequest { ... })                     │
//! │       │                                                             │
//! │       ├── parse string labels (category, sort) case-insensitively   │
//! │       ├── build QueryCriteria                                       │
//! │       ├── catalog.query(&criteria)  ◄── filter + stable sort        │
//! │       └── map to Vec<BookDto> for rendering                         │
//! │                                                                     │
//! │  Unknown labels and bad ranges come back as validation errors,      │
//! │  never as a silently empty grid.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::state::CatalogState;
use bookmart_core::{
    Book, BookId, CategoryFilter, CoreError, Money, QueryCriteria, Rating, SortOrder,
};

/// Book DTO (Data Transfer Object) for the presentation layer.
///
/// ## Why DTO?
/// - Decouples the domain model from the rendering contract
/// - Flattens newtypes (ids, ratings) to plain JSON-friendly scalars
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub cover_image: String,
    pub category: String,
    pub description: String,
    pub rating_tenths: u16,
    pub review_count: u32,
    pub is_available: bool,
}

impl From<&Book> for BookDto {
    fn from(b: &Book) -> Self {
        BookDto {
            id: b.id.get(),
            title: b.title.clone(),
            author: b.author.clone(),
            price_cents: b.price_cents,
            cover_image: b.cover_image.clone(),
            category: b.category.label().to_string(),
            description: b.description.clone(),
            rating_tenths: b.rating.tenths(),
            review_count: b.review_count,
            is_available: b.is_available,
        }
    }
}

/// Browse parameters as the presentation layer sends them: string labels
/// and plain numbers, every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseRequest {
    /// Category label or `"all"`; absent means all.
    pub category: Option<String>,

    /// Inclusive lower price bound in cents; absent means 0.
    pub price_min_cents: Option<i64>,

    /// Inclusive upper price bound in cents; absent means unbounded.
    pub price_max_cents: Option<i64>,

    /// Minimum rating in tenths of a star; absent means 0.
    pub min_rating_tenths: Option<u16>,

    /// Free-text search over title and author.
    pub search: Option<String>,

    /// Sort label (e.g. `"priceAsc"`); absent means newest/catalog order.
    pub sort: Option<String>,
}

impl BrowseRequest {
    /// Parses the request into query criteria.
    ///
    /// Unknown category or sort labels are rejected here, at the string
    /// boundary; range validation happens inside the query engine.
    pub fn to_criteria(&self) -> Result<QueryCriteria, StoreError> {
        let mut criteria = QueryCriteria::default();

        if let Some(label) = &self.category {
            criteria.category = CategoryFilter::parse(label)
                .ok_or_else(|| StoreError::validation(format!("Unknown category: {}", label)))?;
        }

        if let Some(cents) = self.price_min_cents {
            criteria.price_min = Money::from_cents(cents);
        }

        if let Some(cents) = self.price_max_cents {
            criteria.price_max = Money::from_cents(cents);
        }

        if let Some(tenths) = self.min_rating_tenths {
            criteria.min_rating = Rating::from_tenths(tenths);
        }

        if let Some(search) = &self.search {
            criteria.search_text = search.clone();
        }

        if let Some(label) = &self.sort {
            criteria.sort = SortOrder::parse(label)
                .ok_or_else(|| StoreError::validation(format!("Unknown sort order: {}", label)))?;
        }

        Ok(criteria)
    }
}

/// Runs a browse query and returns the ordered result set for rendering.
pub fn browse_catalog(
    catalog: &CatalogState,
    request: &BrowseRequest,
) -> Result<Vec<BookDto>, StoreError> {
    let start = Instant::now();
    debug!(?request, "browse_catalog command");

    let criteria = request.to_criteria()?;
    let books = catalog.inner().query(&criteria)?;
    let dtos: Vec<BookDto> = books.iter().map(BookDto::from).collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "browse_catalog complete"
    );

    Ok(dtos)
}

/// Gets a single book by id (for a detail screen).
///
/// ## Returns
/// The book if found, or `StoreError` with code `NOT_FOUND`.
pub fn get_book(catalog: &CatalogState, id: u32) -> Result<BookDto, StoreError> {
    debug!(id, "get_book command");

    let book_id = BookId(id);
    let dto = catalog
        .inner()
        .get(book_id)
        .map(BookDto::from)
        .ok_or(CoreError::BookNotFound(book_id))?;

    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookmart_core::Catalog;

    fn state() -> CatalogState {
        CatalogState::new(Catalog::seeded())
    }

    #[test]
    fn test_browse_default_request_returns_all() {
        let catalog = state();
        let results = browse_catalog(&catalog, &BrowseRequest::default()).unwrap();
        assert_eq!(results.len(), catalog.inner().len());
    }

    #[test]
    fn test_browse_category_and_sort_labels() {
        let catalog = state();
        let request = BrowseRequest {
            category: Some("fiction".to_string()),
            sort: Some("priceAsc".to_string()),
            ..BrowseRequest::default()
        };

        let results = browse_catalog(&catalog, &request).unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|b| b.category == "Fiction"));
        assert!(results
            .windows(2)
            .all(|w| w[0].price_cents <= w[1].price_cents));
    }

    #[test]
    fn test_browse_unknown_labels_rejected() {
        let catalog = state();

        let request = BrowseRequest {
            category: Some("cooking".to_string()),
            ..BrowseRequest::default()
        };
        let err = browse_catalog(&catalog, &request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let request = BrowseRequest {
            sort: Some("alphabetical".to_string()),
            ..BrowseRequest::default()
        };
        let err = browse_catalog(&catalog, &request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_browse_bad_range_rejected() {
        let catalog = state();
        let request = BrowseRequest {
            price_min_cents: Some(2000),
            price_max_cents: Some(1000),
            ..BrowseRequest::default()
        };

        let err = browse_catalog(&catalog, &request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_book() {
        let catalog = state();
        let first_id = catalog.inner().books()[0].id.get();

        assert_eq!(get_book(&catalog, first_id).unwrap().id, first_id);

        let err = get_book(&catalog, 999_999).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
