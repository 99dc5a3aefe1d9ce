//! # Error Types
//!
//! Domain-specific error types for padaria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Errors Come From                             │
//! │                                                                         │
//! │  padaria-core errors (this file)                                       │
//! │  ├── CoreError        - Cart and order rule violations                 │
//! │  └── ValidationError  - Bad form or quantity input                     │
//! │                                                                         │
//! │  padaria-store errors (separate crate)                                 │
//! │  └── StoreError       - Catalog/auth failures                          │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the screens show                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError/StoreError → ApiError → Screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures from cart and order rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog snapshot being worked on.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity is above the per-line cap.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// A line or cart total does not fit in cents.
    #[error("Amount too large: {0}")]
    AmountTooLarge(String),

    /// An order cannot be created from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected user input.
///
/// Raised by sign-up, the admin product form and cart quantity checks.
/// Each variant names the offending field so the screen can show it inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Shorter than the minimum length.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Longer than the maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Number outside the accepted bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative where a positive number is needed.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (malformed phone, email, price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not (password confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },

    /// Duplicate value (e.g., username already taken).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Mismatch { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result alias for cart and order operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_cap_message_names_both_numbers() {
        let err = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1000 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn duplicate_and_mismatch_messages() {
        let err = ValidationError::Duplicate {
            field: "username".to_string(),
            value: "admin".to_string(),
        };
        assert_eq!(err.to_string(), "username 'admin' already exists");

        let err = ValidationError::Mismatch {
            field: "confirm_password".to_string(),
            other: "password".to_string(),
        };
        assert_eq!(err.to_string(), "confirm_password does not match password");
        assert_eq!(err.field(), "confirm_password");
    }

    #[test]
    fn validation_error_lifts_into_core_error() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        let lifted: CoreError = err.into();
        assert!(matches!(lifted, CoreError::Validation(_)));
    }
}
