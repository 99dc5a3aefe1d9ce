//! # Cart
//!
//! The shopping cart: an ordered list of (product, quantity) lines.
//!
//! ## Line Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(Sonho)      ──► [ Sonho ×1 ]                                       │
//! │  add(Sonho)      ──► [ Sonho ×1, Sonho ×1 ]      (appends, never merges)│
//! │  add_with_qty(Bolo, 3)                                                  │
//! │                  ──► [ Sonho ×1, Sonho ×1, Bolo ×3 ]                    │
//! │  clear()         ──► [ ]                                                │
//! │                                                                         │
//! │  total() = Σ line_total(line)    (recomputed on every read)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each line keeps a full snapshot of the product as it was when added, so
//! later admin edits to the catalog do not change what is already in the cart.
//! Stock is neither checked nor decremented.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot taken when the line was added.
    pub product: Product,

    /// Always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Discounted unit price × quantity, rounded once to cents.
    pub fn line_total(&self) -> Money {
        self.product
            .price()
            .discounted_line_total(self.product.discount(), self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Every line has quantity in `1..=MAX_ITEM_QUANTITY`
/// - Insertion order is kept
/// - `total()` equals the sum of `line_total()` over all lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a new line with quantity 1.
    ///
    /// Adding a product that is already in the cart creates a second line.
    ///
    /// ## Errors
    /// - `AmountTooLarge` if the new total would not fit in cents
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        self.push_line(product, 1)
    }

    /// Appends a new line with the given quantity.
    ///
    /// ## Errors
    /// - `QuantityTooLarge` above `MAX_ITEM_QUANTITY`
    /// - `Validation` for zero or negative quantities
    /// - `AmountTooLarge` as for `add`
    pub fn add_with_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        validate_quantity(quantity)?;
        self.push_line(product, quantity)
    }

    fn push_line(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        let line = product
            .price()
            .checked_line_total(product.discount(), quantity)
            .ok_or_else(|| CoreError::AmountTooLarge(product.name.clone()))?;
        self.total()
            .checked_add(line)
            .ok_or_else(|| CoreError::AmountTooLarge("cart total".to_string()))?;

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (the cart badge).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order total: the sum of the rounded line totals.
    ///
    /// Lines only enter through `add`/`add_with_quantity`, which refuse any
    /// line or running total outside the cents range.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

}

/// Cart summary for screens and JSON responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
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

// =============================================================================
// Unit Tests
// =============================================================================
