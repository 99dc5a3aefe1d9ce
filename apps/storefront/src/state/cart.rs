//! # Cart State
//!
//! Owns the shopper's cart for the lifetime of the process.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shell Command            Command Fn              Cart State Change     │
//! │  ─────────────            ──────────              ─────────────────     │
//! │                                                                         │
//! │  add 6 ──────────────────► add_to_cart() ───────► items.push(line)     │
//! │                                                                         │
//! │  cancel (s) ─────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  finish ─────────────────► finish_order() ──────► items taken          │
//! │                                                                         │
//! │  cart ───────────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All operations take the Mutex for a short synchronous section.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use padaria_core::Cart;

/// Shared cart state.
///
/// Uses `Arc<Mutex<Cart>>`; cart operations are quick and nearly all of
/// them write.
#[derive(Debug, Clone, Default)]
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
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    /// Number of lines, for the cart badge.
    pub fn line_count(&self) -> usize {
        self.with_cart(Cart::line_count)
    }
}
