//! # State Module
//!
//! Application state for the storefront.
//!
//! Each state type has a single responsibility, and each command takes only
//! the state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  AppState (built once in run())                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────┬────────┴───────┬──────────────────┐              │
//! │      ▼              ▼                ▼                  ▼               │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐  ┌──────────────┐        │
//! │  │StoreState│  │CartState │  │ SessionState │  │ ConfigState  │        │
//! │  │          │  │          │  │              │  │              │        │
//! │  │ Store    │  │Arc<Mutex<│  │ user, orders │  │ store_name   │        │
//! │  │ (RwLock  │  │  Cart>>  │  │ Arc<Mutex<>> │  │ currency     │        │
//! │  │  lists)  │  │          │  │              │  │ latency      │        │
//! │  └──────────┘  └──────────┘  └──────────────┘  └──────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: RwLock inside the store                                 │
//! │  • CartState / SessionState: Arc<Mutex<T>>, short sections             │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod session;
mod store;

pub use cart::CartState;
pub use config::{ConfigError, ConfigState, DEFAULT_CONTACT_MESSAGE, DEFAULT_CONTACT_PHONE};
pub use session::SessionState;
pub use store::StoreState;

use padaria_store::Store;

/// All state containers, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: StoreState,
    pub cart: CartState,
    pub session: SessionState,
    pub config: ConfigState,
}

impl AppState {
    /// Seeds a store with the configured latencies.
    pub fn new(config: ConfigState) -> Self {
        let store = Store::seeded(config.store_config());
        AppState::with_store(config, store)
    }

    /// Uses an existing store (tests pass an instant one).
    pub fn with_store(config: ConfigState, store: Store) -> Self {
        AppState {
            store: StoreState::new(store),
            cart: CartState::new(),
            session: SessionState::new(),
            config,
        }
    }
}
