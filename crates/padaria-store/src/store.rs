//! # Store
//!
//! The owned state container for catalog and user data.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Lifecycle                                 │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new() ← latency, simulated failure                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::seeded(config) ← sample catalog + admin user                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Arc<RwLock<Vec<Product>>>              │ ◄── store.products()      │
//! │  │  Arc<RwLock<Vec<User>>>                 │ ◄── store.users()         │
//! │  └─────────────────────────────────────────┘     store.auth()          │
//! │                                                                         │
//! │  Repositories are cheap clones sharing the same lists.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use padaria_core::{Product, User};
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::AuthService;
use crate::repository::product::ProductRepository;
use crate::repository::user::UserRepository;
use crate::seed;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use padaria_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .list_latency(Duration::from_millis(200))
///     .lookup_latency(Duration::ZERO);
/// assert_eq!(config.list_latency, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Artificial delay before `list()` answers.
    /// Default: 1 second
    pub list_latency: Duration,

    /// Artificial delay before `get_by_id()` / `by_category()` answer.
    /// Default: 500 ms
    pub lookup_latency: Duration,

    /// When set, every catalog read fails with `LoadFailed`.
    /// Default: false
    pub simulate_failure: bool,
}

impl StoreConfig {
    /// Default latencies, no simulated failure.
    pub fn new() -> Self {
        StoreConfig {
            list_latency: Duration::from_millis(1000),
            lookup_latency: Duration::from_millis(500),
            simulate_failure: false,
        }
    }

    /// No latency at all (for testing).
    pub fn instant() -> Self {
        StoreConfig {
            list_latency: Duration::ZERO,
            lookup_latency: Duration::ZERO,
            simulate_failure: false,
        }
    }

    /// Sets the list latency.
    pub fn list_latency(mut self, latency: Duration) -> Self {
        self.list_latency = latency;
        self
    }

    /// Sets the lookup latency.
    pub fn lookup_latency(mut self, latency: Duration) -> Self {
        self.lookup_latency = latency;
        self
    }

    /// Sets whether catalog reads fail.
    pub fn simulate_failure(mut self, fail: bool) -> Self {
        self.simulate_failure = fail;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main data handle providing repository access.
///
/// Built once at startup and handed to whoever needs catalog or user data.
#[derive(Debug, Clone)]
pub struct Store {
    products: Arc<RwLock<Vec<Product>>>,
    users: Arc<RwLock<Vec<User>>>,
    config: StoreConfig,
}

impl Store {
    /// Creates a store over the given lists.
    pub fn new(config: StoreConfig, products: Vec<Product>, users: Vec<User>) -> Self {
        info!(
            products = products.len(),
            users = users.len(),
            list_latency_ms = config.list_latency.as_millis() as u64,
            "Initializing store"
        );

        Store {
            products: Arc::new(RwLock::new(products)),
            users: Arc::new(RwLock::new(users)),
            config,
        }
    }

    /// Creates a store holding the sample catalog and the admin user.
    pub fn seeded(config: StoreConfig) -> Self {
        Store::new(config, seed::sample_catalog(), seed::default_users())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.products.clone(), self.config.clone())
    }

    /// Returns the user repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.users.clone())
    }

    /// Returns the auth service.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.users())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new()
            .list_latency(Duration::from_millis(10))
            .simulate_failure(true);

        assert_eq!(config.list_latency, Duration::from_millis(10));
        assert_eq!(config.lookup_latency, Duration::from_millis(500));
        assert!(config.simulate_failure);
    }

    #[test]
    fn test_instant_config() {
        let config = StoreConfig::instant();
        assert!(config.list_latency.is_zero());
        assert!(config.lookup_latency.is_zero());
        assert!(!config.simulate_failure);
    }

    #[tokio::test]
    async fn test_repositories_share_state() {
        let store = Store::seeded(StoreConfig::instant());

        let removed = store.products().delete("1").await.unwrap();
        assert_eq!(removed.id, "1");

        // A fresh repository handle sees the deletion.
        assert_eq!(store.products().list().await.unwrap().len(), 9);
    }
}
