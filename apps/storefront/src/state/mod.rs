//! # State Module
//!
//! Shared state for the storefront app, built once at startup and passed
//! by reference to whatever consumes it — no ambient globals, no
//! singleton providers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     State Architecture                              │
//! │                                                                     │
//! │  main() builds:                                                     │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐           │
//! │  │ CatalogState │  │  CartState   │  │   StoreConfig    │           │
//! │  │              │  │              │  │                  │           │
//! │  │ Arc<Catalog> │  │ Arc<Mutex<   │  │  store_name      │           │
//! │  │ (read-only)  │  │   Cart>>     │  │  currency        │           │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘           │
//! │                                                                     │
//! │  THREAD SAFETY:                                                     │
//! │  • CatalogState: immutable after construction, freely shared        │
//! │  • CartState: Mutex serializes access (one update at a time)        │
//! │  • StoreConfig: read-only after initialization                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::StoreConfig;
