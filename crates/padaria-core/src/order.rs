//! # Orders
//!
//! An order is the frozen result of finishing the cart.
//!
//! ```text
//!   Cart ──finish (signed in)──► Order { status: Pending }
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!                 Completed                   Cancelled
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order from the cart contents.
    ///
    /// The id and clock come from the caller; this crate never generates
    /// either.
    pub fn from_cart(
        id: impl Into<String>,
        user_id: impl Into<String>,
        cart: &Cart,
        created_at: DateTime<Utc>,
    ) -> CoreResult<Order> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(Order {
            id: id.into(),
            user_id: user_id.into(),
            items: cart.items().to_vec(),
            total: cart.total(),
            status: OrderStatus::Pending,
            created_at,
        })
    }

    /// Number of lines in the order.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}
