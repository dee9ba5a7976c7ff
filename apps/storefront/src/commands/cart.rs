//! # Cart Commands
//!
//! Cart manipulation at the command boundary.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Lifecycle                                 │
//! │                                                                     │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                     │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                     │
//! │  │  Cart    │     │          │     │ Summary  │                     │
//! │  └──────────┘     └──────────┘     └──────────┘                     │
//! │                        │                │                           │
//! │                   add_to_cart      checkout                         │
//! │                   update_cart_line (checkout.rs)                    │
//! │                   remove_from_cart                                  │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   clear_cart ───────────────► (back to empty)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Availability Policy
//! The core `Cart` never consults `is_available`; this layer does. An
//! unavailable book is rejected here, before the cart is touched, so the
//! aggregator itself stays total over valid books.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::state::{CartState, CatalogState};
use bookmart_core::{BookId, Cart, CartLine, CoreError};

/// One cart line as the presentation layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub book_id: u32,
    pub title: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&CartLine> for CartLineDto {
    fn from(l: &CartLine) -> Self {
        CartLineDto {
            book_id: l.book_id.get(),
            title: l.title.clone(),
            unit_price_cents: l.unit_price.cents(),
            quantity: l.quantity,
            line_total_cents: l.line_total().cents(),
        }
    }
}

/// Cart totals summary for rendering a checkout footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineDto>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().iter().map(CartLineDto::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one copy of a book to the cart.
///
/// ## Behavior
/// - Book already in cart: quantity increases by 1
/// - Book not in cart: added as a new line with quantity 1
/// - Price and title are frozen at time of adding
/// - An unknown id is `NOT_FOUND`; an unavailable book is rejected with
///   a validation error and the cart is left untouched
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    book_id: u32,
) -> Result<CartResponse, StoreError> {
    debug!(book_id, "add_to_cart command");

    let id = BookId(book_id);
    let book = catalog
        .inner()
        .get(id)
        .ok_or(CoreError::BookNotFound(id))?;

    if !book.is_available {
        return Err(StoreError::validation(format!(
            "'{}' is not available for purchase",
            book.title
        )));
    }

    let response = cart.with_cart_mut(|c| {
        c.add(book)?;
        Ok::<CartResponse, StoreError>(CartResponse::from(&*c))
    })?;

    info!(book_id, total_cents = response.totals.total_cents, "Book added to cart");
    Ok(response)
}

/// Sets the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity <= 0: removes the line (no error, even for a missing id)
/// - Positive quantity on a missing id: cart error (updates never create
///   lines)
pub fn update_cart_line(
    cart: &CartState,
    book_id: u32,
    quantity: i64,
) -> Result<CartResponse, StoreError> {
    debug!(book_id, quantity, "update_cart_line command");

    cart.with_cart_mut(|c| {
        c.update_quantity(BookId(book_id), quantity)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Removes a line from the cart.
///
/// Removing an id that is not in the cart is a no-op, mirroring the
/// core: the command cannot fail.
pub fn remove_from_cart(cart: &CartState, book_id: u32) -> CartResponse {
    debug!(book_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(BookId(book_id));
        CartResponse::from(&*c)
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User abandons the session
/// - After checkout completes (checkout.rs does this itself)
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
