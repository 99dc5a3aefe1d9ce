//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## From Failure to Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell line ("login admin x")                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::* fn                                                  │  │
//! │  │  returns Result<_, ApiError>                                     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::InvalidCredentials ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Validation Error? ─── ValidationError ─────────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Shell prints "Erro [INVALID_CREDENTIALS]: ..." and stays on the       │
//! │  same screen. Nothing is retried.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use padaria_core::{CoreError, ValidationError};
use padaria_store::StoreError;
use serde::Serialize;
use thiserror::Error;

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Stable code the shell prints in brackets
    pub code: ErrorCode,

    /// Text shown to the customer
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or user not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Sign-in rejected
    InvalidCredentials,

    /// Catalog could not be loaded
    LoadError,

    /// Signed-in admin required (or any sign-in, for the profile)
    Forbidden,

    /// Cart operation failed
    CartError,

    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Wire name, e.g. `"NOT_FOUND"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::LoadError => "LOAD_ERROR",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Builds an error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// `NOT_FOUND` for a missing product or user.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// `VALIDATION_ERROR` with the field message.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// `CART_ERROR`, used for the empty cart.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::InvalidCredentials => {
                ApiError::new(ErrorCode::InvalidCredentials, "Usuário ou senha inválidos")
            }
            StoreError::LoadFailed(what) => {
                tracing::error!(what = %what, "Catalog load failed");
                ApiError::new(ErrorCode::LoadError, "Erro ao carregar produtos")
            }
            StoreError::Validation(e) => e.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::ValidationError,
                format!("Quantidade {} acima do máximo por item ({})", requested, max),
            ),
            CoreError::AmountTooLarge(what) => {
                ApiError::cart(format!("Valor acima do permitido: {}", what))
            }
            CoreError::EmptyCart => ApiError::cart("Seu carrinho está vazio"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Errors that stop the storefront before the first screen.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_codes() {
        let err: ApiError = StoreError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        let err: ApiError = StoreError::LoadFailed("products".to_string()).into();
        assert_eq!(err.code, ErrorCode::LoadError);

        let err: ApiError = StoreError::not_found("Product", "42").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[test]
    fn test_validation_maps_to_validation_error() {
        let err: ApiError = StoreError::Validation(ValidationError::Duplicate {
            field: "username".to_string(),
            value: "admin".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "username 'admin' already exists");
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Quantidade 1000 acima do máximo por item (999)");

        let err: ApiError = CoreError::AmountTooLarge("Bolo".to_string()).into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Valor acima do permitido: Bolo");
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_value(ApiError::forbidden("Apenas administradores")).unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert_eq!(json["message"], "Apenas administradores");
    }

    #[test]
    fn test_display() {
        let err = ApiError::cart("vazio");
        assert_eq!(err.to_string(), "[CART_ERROR] vazio");
    }
}
