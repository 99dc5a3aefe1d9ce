//! # Commands Module
//!
//! Everything a screen can ask of the storefront.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog browse, search, category chips, export
//! ├── cart.rs     ◄─── Cart manipulation, finish order
//! ├── auth.rs     ◄─── Sign-in, sign-up, sign-out, profile
//! ├── admin.rs    ◄─── Product add / edit / delete (admins only)
//! └── contact.rs  ◄─── Messaging deep link
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell line: "add 6 2"                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  shell::parse_command ──► Command::Add { id: "6", quantity: Some(2) }   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      &state.store,   ◄── only the state it needs                       │
//! │      &state.cart,                                                       │
//! │      "6", Some(2),                                                      │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  screens::render_* writes the next screen                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! ```rust,ignore
//! // Only needs the store
//! async fn get_product(store: &StoreState, id: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! async fn add_to_cart(store: &StoreState, cart: &CartState, ...)
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod contact;
pub mod product;
