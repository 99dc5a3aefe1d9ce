//! # Store State
//!
//! Wraps the `Store` for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_products(store: &StoreState) -> Result<Vec<Product>, ApiError> {
//!     Ok(store.inner().products().list().await?)
//! }
//! ```

use padaria_store::Store;

/// Wrapper around `Store` for command access.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the store.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
