//! # Product Commands
//!
//! Catalog browsing: list, category chips, lookup, JSON export.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Home Screen Browse Flow                              │
//! │                                                                         │
//! │  list_products()  ← simulated latency, once per catalog change         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell keeps the list; "busca bolo" / "categoria Pães" only            │
//! │  change its ProductFilter                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductFilter { query, category }.apply(&catalog)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use padaria_core::{categories, Product};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;

/// Returns the whole catalog.
pub async fn list_products(store: &StoreState) -> Result<Vec<Product>, ApiError> {
    debug!("list_products command");
    Ok(store.inner().products().list().await?)
}

/// Gets one product.
pub async fn get_product(store: &StoreState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");

    store
        .inner()
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Category chips, in order of first appearance.
pub async fn list_categories(store: &StoreState) -> Result<Vec<String>, ApiError> {
    let catalog = store.inner().products().list().await?;
    Ok(categories(&catalog))
}

/// The catalog as pretty-printed camelCase JSON, prices in reais.
pub async fn export_catalog(store: &StoreState) -> Result<String, ApiError> {
    let catalog = store.inner().products().list().await?;
    let json = serde_json::to_string_pretty(&catalog)
        .map_err(|e| ApiError::internal(format!("Failed to serialize catalog: {}", e)))?;

    info!(products = catalog.len(), bytes = json.len(), "Catalog exported");
    Ok(json)
}
