//! # Cart State
//!
//! Owns the session cart behind a mutex.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. The core itself is single-threaded; serializing calls here is the
//!    app's job, exactly one update at a time
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them modify state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use bookmart_core::Cart;

/// Managed cart state for the storefront session.
///
/// The cart's lifetime is the process's lifetime: there is no
/// persistence, and restart loses all cart state.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&book))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
