//! # Product Repository
//!
//! Catalog reads (with simulated latency) and admin mutations.
//!
//! ## Read Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list() / get_by_id() / by_category()                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sleep(latency)          list: 1000 ms, lookups: 500 ms by default      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  simulate_failure? ──yes──► Err(LoadFailed)                             │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  read lock ──► clone matching products (source order)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations skip the latency and take the write lock directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use padaria_core::validation::{
    validate_category, validate_description, validate_discount_percentage, validate_price_cents,
    validate_product_name, validate_stock,
};
use padaria_core::{NewProduct, Product, ProductChanges};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::StoreConfig;

/// Repository for catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// // Whole catalog
/// let products = repo.list().await?;
///
/// // Category chip
/// let paes = repo.by_category("Pães").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    config: StoreConfig,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(products: Arc<RwLock<Vec<Product>>>, config: StoreConfig) -> Self {
        ProductRepository { products, config }
    }

    /// Waits out the simulated network delay, then applies simulated failure.
    async fn simulate_request(&self, latency: Duration, what: &str) -> StoreResult<()> {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if self.config.simulate_failure {
            warn!(what = %what, "Simulated catalog failure");
            return Err(StoreError::LoadFailed(what.to_string()));
        }
        Ok(())
    }

    /// Returns the whole catalog in source order.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let started = Instant::now();
        self.simulate_request(self.config.list_latency, "products")
            .await?;

        let products = self.products.read().await.clone();

        debug!(
            count = products.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Listed products"
        );
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.simulate_request(self.config.lookup_latency, "product")
            .await?;

        let product = self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned();

        debug!(id = %id, found = product.is_some(), "Product lookup");
        Ok(product)
    }

    /// Returns the products whose category equals `category` exactly.
    pub async fn by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        self.simulate_request(self.config.lookup_latency, "products by category")
            .await?;

        let products: Vec<Product> = self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();

        debug!(category = %category, count = products.len(), "Products by category");
        Ok(products)
    }

    /// Adds a product to the end of the catalog with a fresh UUID.
    ///
    /// ## Validation
    /// Name, description and category are required; price and stock must be
    /// non-negative; discount must be 0-100. A missing expiration date
    /// defaults to today.
    pub async fn insert(&self, new: NewProduct) -> StoreResult<Product> {
        validate_product_name(&new.name)?;
        validate_description(&new.description)?;
        validate_category(&new.category)?;
        validate_price_cents(new.price_cents)?;
        validate_discount_percentage(new.discount_percentage)?;
        validate_stock(new.quantity)?;

        let product = Product {
            id: generate_product_id(),
            name: new.name.trim().to_string(),
            description: new.description.trim().to_string(),
            price_cents: new.price_cents,
            expiration_date: new
                .expiration_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            discount_percentage: new.discount_percentage,
            image_url: new.image_url.trim().to_string(),
            category: new.category.trim().to_string(),
            quantity: new.quantity,
        };

        debug!(id = %product.id, name = %product.name, "Inserting product");
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    /// Applies `changes` to the product with `id` and returns the new record.
    pub async fn update(&self, id: &str, changes: &ProductChanges) -> StoreResult<Product> {
        if let Some(name) = &changes.name {
            validate_product_name(name)?;
        }
        if let Some(description) = &changes.description {
            validate_description(description)?;
        }
        if let Some(category) = &changes.category {
            validate_category(category)?;
        }
        if let Some(price_cents) = changes.price_cents {
            validate_price_cents(price_cents)?;
        }
        if let Some(discount) = changes.discount_percentage {
            validate_discount_percentage(discount)?;
        }

        debug!(id = %id, "Updating product");

        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        *slot = changes.apply_to(slot);
        Ok(slot.clone())
    }

    /// Removes the product with `id` and returns it.
    pub async fn delete(&self, id: &str) -> StoreResult<Product> {
        debug!(id = %id, "Deleting product");

        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        Ok(products.remove(index))
    }

    /// Counts catalog entries (no latency).
    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}

/// Generates a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Store, StoreConfig, StoreError};
    use padaria_core::{NewProduct, ProductChanges, ProductFilter, ValidationError};
    use std::time::{Duration, Instant};

    fn store() -> Store {
        Store::seeded(StoreConfig::instant())
    }

    fn ids(products: &[padaria_core::Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn broa() -> NewProduct {
        NewProduct {
            name: "Broa de Milho".to_string(),
            description: "Broa caseira de fubá".to_string(),
            price_cents: 700,
            expiration_date: None,
            discount_percentage: 0,
            image_url: String::new(),
            category: "Pães".to_string(),
            quantity: 12,
        }
    }

    #[tokio::test]
    async fn test_list_keeps_source_order() {
        let products = store().products().list().await.unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "Pão Francês");
        assert_eq!(products[9].name, "Pão de Mel");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = store().products();

        let sonho = repo.get_by_id("6").await.unwrap().unwrap();
        assert_eq!(sonho.name, "Sonho");
        assert_eq!(sonho.price_cents, 350);

        assert!(repo.get_by_id("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_by_category_paes() {
        let paes = store().products().by_category("Pães").await.unwrap();
        assert_eq!(ids(&paes), vec!["1", "7"]);

        // Exact match only.
        let none = store().products().by_category("pães").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_bolo_on_sample_catalog() {
        let products = store().products().list().await.unwrap();
        let bolos = ProductFilter::search("bolo").apply(&products);
        assert_eq!(ids(&bolos), vec!["2", "8"]);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let store = Store::seeded(StoreConfig::instant().simulate_failure(true));

        assert!(matches!(
            store.products().list().await,
            Err(StoreError::LoadFailed(_))
        ));
        assert!(matches!(
            store.products().get_by_id("1").await,
            Err(StoreError::LoadFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_list_latency_is_applied() {
        let config = StoreConfig::instant().list_latency(Duration::from_millis(30));
        let store = Store::seeded(config);

        let started = Instant::now();
        store.products().list().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_insert_assigns_uuid_and_appends() {
        let repo = store().products();

        let created = repo.insert(broa()).await.unwrap();
        assert_eq!(created.id.len(), 36);
        assert_eq!(repo.count().await, 11);

        let products = repo.list().await.unwrap();
        assert_eq!(products.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_product() {
        let repo = store().products();

        let mut bad = broa();
        bad.name = "  ".to_string();
        assert!(matches!(
            repo.insert(bad).await,
            Err(StoreError::Validation(ValidationError::Required { .. }))
        ));

        let mut bad = broa();
        bad.discount_percentage = 120;
        assert!(matches!(
            repo.insert(bad).await,
            Err(StoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        assert_eq!(repo.count().await, 10);
    }

    #[tokio::test]
    async fn test_update_product() {
        let repo = store().products();

        let changes = ProductChanges {
            price_cents: Some(450),
            discount_percentage: Some(0),
            ..Default::default()
        };
        let updated = repo.update("7", &changes).await.unwrap();
        assert_eq!(updated.price_cents, 450);
        assert_eq!(updated.discount_percentage, 0);
        assert_eq!(updated.name, "Baguete");

        let stored = repo.get_by_id("7").await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let repo = store().products();

        assert!(matches!(
            repo.update("nope", &ProductChanges::default()).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete("nope").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let repo = store().products();

        let removed = repo.delete("3").await.unwrap();
        assert_eq!(removed.name, "Croissant");
        assert!(repo.get_by_id("3").await.unwrap().is_none());
        assert_eq!(repo.count().await, 9);
    }
}
