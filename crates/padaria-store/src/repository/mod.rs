//! # Repository Module
//!
//! Async accessors over the in-memory lists.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                                                               │
//! │       │                                                                 │
//! │       │  store.products().by_category("Pães")                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── by_category(&self, category)                                      │
//! │  ├── insert / update / delete (admin)                                  │
//! │       │                                                                 │
//! │       │  sleep(latency), then read/write lock                          │
//! │       ▼                                                                 │
//! │  Arc<RwLock<Vec<Product>>>                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Catalog reads and admin mutations
//! - [`UserRepository`](user::UserRepository) - User lookup and sign-up storage

pub mod product;
pub mod user;
