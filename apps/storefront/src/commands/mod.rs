//! # Commands Module
//!
//! The in-process boundary a presentation layer invokes. Commands take
//! the state they need explicitly, parse boundary DTOs, call into
//! bookmart-core, and map errors to `StoreError`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Browse / search / book lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Checkout + payment provider stub
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn browse_catalog(catalog: &CatalogState, request: &BrowseRequest) -> ...
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, id: u32) -> ...
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
