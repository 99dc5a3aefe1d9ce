//! # Cart Commands
//!
//! Cart manipulation and checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐     ┌──────────┐   │
//! │  │  Empty   │────►│ In Cart  │────►│ OrderDetails │────►│  Order   │   │
//! │  │  Cart    │     │          │     │   "finish"   │     │ pending  │   │
//! │  └──────────┘     └──────────┘     └──────────────┘     └──────────┘   │
//! │                        │                  │                             │
//! │                   add_to_cart       not signed in?                      │
//! │                   (appends)         ──► Login screen                    │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use padaria_core::{Cart, CartItem, CartTotals, Order};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, SessionState, StoreState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Result of pressing "Finalizar Pedido".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// Nobody is signed in; the shopper is sent to the Login screen.
    LoginRequired,

    /// A pending order was created and the cart emptied.
    Placed(Order),
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Always appends a new line, even for a product already in the cart
/// - `quantity: None` adds one unit
/// - The product is snapshotted at this moment
pub async fn add_to_cart(
    store: &StoreState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = ?quantity, "add_to_cart command");

    let product = store
        .inner()
        .products()
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    cart.with_cart_mut(|c| {
        match quantity {
            None => c.add(&product)?,
            Some(qty) => c.add_with_quantity(&product, qty)?,
        }
        Ok::<CartResponse, ApiError>(CartResponse::from(&*c))
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Shopper cancels the order (after confirming)
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Finishes the order.
///
/// ## Behavior
/// - Not signed in: nothing changes, returns `LoginRequired`
/// - Empty cart: `CART_ERROR`
/// - Otherwise: records a pending order for the user and empties the cart
pub fn finish_order(cart: &CartState, session: &SessionState) -> Result<Checkout, ApiError> {
    let Some(user) = session.current_user() else {
        debug!("finish_order without a signed-in user");
        return Ok(Checkout::LoginRequired);
    };

    let order = cart.with_cart_mut(|c| {
        let order = Order::from_cart(Uuid::new_v4().to_string(), &user.id, c, Utc::now())?;
        c.clear();
        Ok::<Order, ApiError>(order)
    })?;

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        lines = order.line_count(),
        total_cents = order.total.cents(),
        "Order placed"
    );
    session.record_order(order.clone());
    Ok(Checkout::Placed(order))
}
