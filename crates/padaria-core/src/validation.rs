//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Screen forms (storefront)                                     │
//! │  ├── Required fields, password confirmation                             │
//! │  └── Immediate inline feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Phone / email patterns for sign-up                                 │
//! │  └── Product form rules (price, discount, stock)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (padaria-store)                                         │
//! │  └── Uniqueness (usernames), existence (product ids)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use padaria_core::validation::{validate_email, validate_phone};
//!
//! assert!(validate_phone("11999999999").is_ok());
//! assert!(validate_phone("123").is_err());
//! assert!(validate_email("admin@example.com").is_ok());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::DiscountRate;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// 10 or 11 digits: area code plus landline or mobile number.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("Invalid phone regex"));

/// Something, an `@`, a domain with at least one dot. No whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Minimum password length on the sign-up form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn max_chars(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Sign-up Validators
// =============================================================================

/// Validates a phone number: exactly 10 or 11 ASCII digits.
///
/// ```rust
/// use padaria_core::validation::validate_phone;
///
/// assert!(validate_phone("4733334444").is_ok());
/// assert!(validate_phone("(47) 3333-4444").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain 10 or 11 digits".to_string(),
        });
    }
    Ok(())
}

/// Validates an email: local part, `@`, and a dotted domain.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.com".to_string(),
        });
    }
    Ok(())
}

/// Validates a person's name (required, at most 100 characters).
pub fn validate_person_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;
    max_chars("name", name, 100)
}

/// Validates a username (required, no whitespace, at most 50 characters).
pub fn validate_username(username: &str) -> ValidationResult<()> {
    required("username", username)?;
    max_chars("username", username, 50)?;

    if username.trim().chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }
    Ok(())
}

/// Validates the sign-up password and its confirmation.
///
/// ## Rules
/// - At least `MIN_PASSWORD_LENGTH` characters
/// - Confirmation must match exactly
pub fn validate_password(password: &str, confirmation: &str) -> ValidationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if password != confirmation {
        return Err(ValidationError::Mismatch {
            field: "confirm_password".to_string(),
            other: "password".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name (required, at most 200 characters).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;
    max_chars("name", name, 200)
}

/// Validates a product description (required, at most 1000 characters).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    required("description", description)?;
    max_chars("description", description, 1000)
}

/// Validates a category label (required, at most 50 characters).
pub fn validate_category(category: &str) -> ValidationResult<()> {
    required("category", category)?;
    max_chars("category", category, 50)
}

/// Validates a price in cents: `0..=MAX_PRICE_CENTS`.
///
/// ```rust
/// use padaria_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// assert!(validate_price_cents(100_000_001).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }
    Ok(())
}

/// Validates a discount percentage (0-100).
pub fn validate_discount_percentage(percent: u32) -> ValidationResult<()> {
    if percent > DiscountRate::MAX_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: i64::from(DiscountRate::MAX_PERCENT),
        });
    }
    Ok(())
}

/// Validates a stock count (non-negative).
pub fn validate_stock(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Cart & Search Validators
// =============================================================================

/// Validates a cart line quantity (1..=MAX_ITEM_QUANTITY).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a search query and returns it trimmed.
///
/// Empty is fine (shows the whole catalog); at most 100 characters.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    max_chars("query", query, 100)?;
    Ok(query.trim().to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
