//! # padaria-core: Pure Business Logic for the Padaria Storefront
//!
//! Domain types and rules for the bakery storefront, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Padaria Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront (terminal screens)                  │   │
//! │  │    Home ──► OrderDetails ──► Login/SignUp ──► Profile/Admin    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ padaria-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ filter  │ │  route  │  │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ search  │ │  Route  │  │   │
//! │  │   │  User   │ │Discount │ │CartItem │ │category │ │ Screen  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 padaria-store (data layer)                      │   │
//! │  │        in-memory catalog, users, auth, simulated latency        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, User, DiscountRate
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart and line totals
//! - [`filter`] - Search and category filtering
//! - [`order`] - Orders built from the cart
//! - [`route`] - Navigation targets
//! - [`validation`] - Sign-up and product form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use padaria_core::{Cart, ProductFilter};
//! # use padaria_core::Product;
//! # use chrono::NaiveDate;
//! # let sonho = Product {
//! #     id: "6".into(), name: "Sonho".into(), description: String::new(),
//! #     price_cents: 350, expiration_date: NaiveDate::from_ymd_opt(2024, 3, 23).unwrap(),
//! #     discount_percentage: 15, image_url: String::new(),
//! #     category: "Doces".into(), quantity: 20,
//! # };
//!
//! let mut cart = Cart::new();
//! cart.add(&sonho).unwrap();
//! assert_eq!(cart.total().to_string(), "R$ 2.98");
//!
//! let doces = ProductFilter::category("Doces").apply(&[sonho]);
//! assert_eq!(doces.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod filter;
pub mod money;
pub mod order;
pub mod route;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{categories, ProductFilter};
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use route::{Route, Screen};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// Catches typos like 1000 instead of 10 on the quantity prompt.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price the catalog accepts, in cents (R$ 1,000,000.00).
///
/// With `MAX_ITEM_QUANTITY` this keeps a line total near 10^11 cents, far
/// inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
