//! # Cart Aggregator
//!
//! The mutable cart: a mapping from book id to one cart line, with a
//! running total that is recomputed on every read.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  UI Gesture               Operation             State Change        │
//! │  ──────────               ─────────             ────────────        │
//! │                                                                     │
//! │  Tap "Add" ─────────────► add(&book) ─────────► qty += 1 or new     │
//! │                                                 line with qty 1     │
//! │                                                                     │
//! │  Change quantity ───────► update_quantity() ──► line.qty = n        │
//! │                           (n <= 0 removes the line)                 │
//! │                                                                     │
//! │  Tap "Remove" ──────────► remove(id) ─────────► line deleted        │
//! │                           (missing id: silent no-op)                │
//! │                                                                     │
//! │  Tap "Clear" ───────────► clear() ────────────► all lines gone      │
//! │                                                                     │
//! │  Checkout summary ──────► total() ────────────► Σ price × qty,      │
//! │                                                 recomputed, never   │
//! │                                                 cached              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifetime
//! The cart lives for the process (one UI session). There is no
//! persistence; restart loses all cart state. That is an accepted,
//! documented property of the system, not an accident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Book, BookId};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One (book, quantity) pairing held by the cart.
///
/// ## Design Notes
/// - `book_id`: reference back to the catalog
/// - `title` / `unit_price`: frozen copies taken when the line is
///   created. The cart owns no catalog data beyond what it needs to
///   render a summary and compute totals, and a later catalog change
///   cannot silently reprice a cart.
/// - `quantity` is always >= 1 while the line exists; a line that would
///   drop to zero is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id of the book.
    pub book_id: BookId,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart; always positive.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a book with quantity 1.
    fn from_book(book: &Book) -> Self {
        CartLine {
            book_id: book.id,
            title: book.title.clone(),
            unit_price: book.price(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per distinct book id (adding the same book again
///   increases the quantity)
/// - Every line has quantity >= 1
/// - `total()` always equals the sum of line totals; it is recomputed on
///   every read, never cached
/// - Maximum distinct lines: [`MAX_CART_LINES`]; maximum quantity per
///   line: [`MAX_LINE_QUANTITY`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one copy of a book to the cart.
    ///
    /// ## Behavior
    /// - Book already in cart: its quantity increases by 1
    /// - Book not in cart: a new line with quantity 1 is appended
    ///
    /// Availability is not consulted here; the cart is total over valid
    /// books, and the command layer decides whether an unavailable book
    /// may be offered at all.
    ///
    /// ## Errors
    /// - `QuantityTooLarge` if the line would exceed [`MAX_LINE_QUANTITY`]
    /// - `CartTooLarge` if a new line would exceed [`MAX_CART_LINES`]
    pub fn add(&mut self, book: &Book) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.book_id == book.id) {
            if line.quantity + 1 > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: line.quantity + 1,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_book(book));
        Ok(())
    }

    /// Removes the line for a book id.
    ///
    /// Removing an id that is not in the cart is a silent no-op, not an
    /// error: the user's intent (book absent from cart) already holds.
    pub fn remove(&mut self, book_id: BookId) {
        self.lines.retain(|l| l.book_id != book_id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly like [`Cart::remove`] (and is
    ///   `Ok` even when the id has no line)
    /// - otherwise the line's quantity is set to the given value
    ///
    /// ## Errors
    /// - `LineNotFound` if a positive quantity is requested for an id
    ///   that was never added — updating is not a way to create lines
    /// - `QuantityTooLarge` past [`MAX_LINE_QUANTITY`]
    pub fn update_quantity(&mut self, book_id: BookId, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(book_id);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        match self.lines.iter_mut().find(|l| l.book_id == book_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::LineNotFound(book_id)),
        }
    }

    /// Clears all lines from the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Calculates the cart total: Σ (unit price × quantity).
    ///
    /// Recomputed on every call; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Returns the lines in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Rating};

    fn test_book(id: u32, price_cents: i64) -> Book {
        Book {
            id: BookId(id),
            title: format!("Book {}", id),
            author: "Test Author".to_string(),
            price_cents,
            cover_image: String::new(),
            category: Category::Fiction,
            description: String::new(),
            rating: Rating::from_tenths(40),
            review_count: 5,
            is_available: true,
        }
    }

    #[test]
    fn test_add_twice_yields_one_line_quantity_two() {
        let mut cart = Cart::new();
        let book = test_book(1, 1000);

        cart.add(&book).unwrap();
        cart.add(&book).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_two_books_total() {
        let mut cart = Cart::new();
        let book1 = test_book(1, 1000);
        let book2 = test_book(2, 500);

        cart.add(&book1).unwrap();
        cart.add(&book1).unwrap();
        cart.add(&book2).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total(), Money::from_cents(1000 * 2 + 500));
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        let book = test_book(1, 750);

        cart.add(&book).unwrap();
        cart.update_quantity(book.id, 0).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        let book = test_book(1, 750);

        cart.add(&book).unwrap();
        cart.update_quantity(book.id, 4).unwrap();

        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.total(), Money::from_cents(3000));
    }

    #[test]
    fn test_update_quantity_missing_line_is_not_found() {
        let mut cart = Cart::new();

        // Positive quantity on a never-added id: strict error, pinned here
        let err = cart.update_quantity(BookId(42), 3);
        assert!(matches!(err, Err(CoreError::LineNotFound(BookId(42)))));

        // Zero quantity means removal; removal of a missing line is fine
        assert!(cart.update_quantity(BookId(42), 0).is_ok());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        let book = test_book(1, 1000);
        cart.add(&book).unwrap();

        cart.remove(BookId(999));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_clear_then_total_is_zero() {
        let mut cart = Cart::new();
        cart.add(&test_book(1, 1000)).unwrap();
        cart.add(&test_book(2, 2000)).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_quantity_limit_enforced() {
        let mut cart = Cart::new();
        let book = test_book(1, 100);

        cart.add(&book).unwrap();
        cart.update_quantity(book.id, MAX_LINE_QUANTITY).unwrap();

        // One more copy would cross the limit
        let err = cart.add(&book);
        assert!(matches!(err, Err(CoreError::QuantityTooLarge { .. })));
        assert_eq!(cart.lines()[0].quantity, MAX_LINE_QUANTITY);

        let err = cart.update_quantity(book.id, MAX_LINE_QUANTITY + 1);
        assert!(matches!(err, Err(CoreError::QuantityTooLarge { .. })));
    }

    #[test]
    fn test_cart_line_limit_enforced() {
        let mut cart = Cart::new();
        for id in 1..=MAX_CART_LINES as u32 {
            cart.add(&test_book(id, 100)).unwrap();
        }

        let err = cart.add(&test_book(9999, 100));
        assert!(matches!(err, Err(CoreError::CartTooLarge { .. })));
        assert_eq!(cart.line_count(), MAX_CART_LINES);
    }

    #[test]
    fn test_line_snapshot_freezes_price() {
        let mut cart = Cart::new();
        let book = test_book(1, 1000);
        cart.add(&book).unwrap();

        // The cart holds its own copy of the price
        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(1000));
        assert_eq!(cart.lines()[0].title, "Book 1");
    }

    #[test]
    fn test_total_quantity_counts_all_copies() {
        let mut cart = Cart::new();
        let book1 = test_book(1, 100);
        let book2 = test_book(2, 100);

        cart.add(&book1).unwrap();
        cart.add(&book1).unwrap();
        cart.add(&book2).unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line_count(), 2);
    }
}
