//! # Catalog State
//!
//! Wraps the immutable `Catalog` for shared read-only access.
//!
//! ## Thread Safety
//! The catalog is never mutated after construction, so it needs no lock:
//! an `Arc` handle is enough for any number of concurrent readers.

use std::sync::Arc;

use bookmart_core::Catalog;

/// Shared read-only handle to the catalog.
///
/// ## Why a Wrapper?
/// Keeps command signatures explicit about which state they touch, and
/// gives the catalog the same shape as the other state objects.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Creates a new CatalogState wrapping the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handles_see_same_catalog() {
        let state = CatalogState::new(Catalog::seeded());
        let clone = state.clone();

        assert_eq!(state.inner().len(), clone.inner().len());
    }
}
