//! # padaria-store: In-Memory Data Layer for the Padaria Storefront
//!
//! Owns the product catalog and the user list, and exposes them through
//! async repositories that behave like a slow remote API.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Padaria Data Flow                                  │
//! │                                                                         │
//! │  Storefront command (list_products)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  padaria-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │  AuthService │  │   │
//! │  │   │  (store.rs)   │    │ ProductRepo   │    │  sign_in     │  │   │
//! │  │   │ StoreConfig   │◄───│ UserRepo      │◄───│  sign_up     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           ▲                                                     │   │
//! │  │           │ seed.rs: 10 sample products + admin                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle and configuration
//! - [`repository`] - Product and user repositories
//! - [`auth`] - Mock authentication
//! - [`seed`] - Sample catalog and default users
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use padaria_store::{Store, StoreConfig};
//!
//! let store = Store::seeded(StoreConfig::new());
//!
//! let products = store.products().list().await?;
//! let admin = store.auth().sign_in("admin", "senha123").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::AuthService;
pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
