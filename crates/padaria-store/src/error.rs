//! # Store Error Types
//!
//! Error types for catalog and user operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (padaria-core)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity/id context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront) ← Code + message for the screen              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use padaria_core::ValidationError;
use thiserror::Error;

/// Catalog and auth errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a product id that is not in the catalog
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Username/password pair rejected by sign-in.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Catalog fetch failed (simulated rejection).
    #[error("Failed to load {0}")]
    LoadFailed(String),

    /// Input rejected by a validation rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Product", "42");
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_converts() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: name is required");
    }
}
