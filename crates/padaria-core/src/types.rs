//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      Product        │   │      User       │   │  DiscountRate   │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id                 │   │  id             │   │  percent (u32)  │   │
//! │  │  name, description  │   │  name, phone    │   │  30 = 30% off   │   │
//! │  │  price_cents        │   │  email          │   └─────────────────┘   │
//! │  │  discount_percentage│   │  username       │                         │
//! │  │  category, quantity │   │  is_admin       │                         │
//! │  └─────────────────────┘   └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products and users are immutable values; the store hands out clones and
//! replaces whole records on admin edits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount as a whole percentage, 0-100.
///
/// Values above 100 are clamped on construction so discounted prices can
/// never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Largest allowed discount.
    pub const MAX_PERCENT: u32 = 100;

    /// Creates a discount rate from a percentage (clamped to 100).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        if percent > Self::MAX_PERCENT {
            DiscountRate(Self::MAX_PERCENT)
        } else {
            DiscountRate(percent)
        }
    }

    /// Returns the percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the bakery shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier ("1".."10" for the sample catalog, UUID for new ones).
    pub id: String,

    /// Display name, searched case-insensitively.
    pub name: String,

    pub description: String,

    /// Unit price in cents. Serialized as `price` in reais (`3.5`).
    #[serde(rename = "price", with = "crate::money::reais")]
    #[ts(type = "number")]
    pub price_cents: i64,

    /// Best-before date. Carried for display only.
    #[ts(as = "String")]
    pub expiration_date: NaiveDate,

    /// Discount percentage, 0-100.
    pub discount_percentage: u32,

    pub image_url: String,

    /// Free-text category label ("Pães", "Bolos", ...).
    pub category: String,

    /// Stock count. Never decremented and never checked against the cart.
    pub quantity: i64,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_percent(self.discount_percentage)
    }

    /// Unit price after discount, rounded to cents.
    pub fn discounted_price(&self) -> Money {
        self.price().apply_discount(self.discount())
    }

    /// Whether the "N% OFF" badge should be shown.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0
    }
}

/// Input for creating a product from the admin screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    #[ts(as = "Option<String>")]
    pub expiration_date: Option<NaiveDate>,
    pub discount_percentage: u32,
    pub image_url: String,
    pub category: String,
    pub quantity: i64,
}

/// Editable fields of an existing product (admin / edit screens).
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub discount_percentage: Option<u32>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl ProductChanges {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price_cents.is_none()
            && self.discount_percentage.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
    }

    /// Produces the edited copy of `product`.
    pub fn apply_to(&self, product: &Product) -> Product {
        let mut updated = product.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = description.trim().to_string();
        }
        if let Some(price_cents) = self.price_cents {
            updated.price_cents = price_cents;
        }
        if let Some(discount) = self.discount_percentage {
            updated.discount_percentage = discount;
        }
        if let Some(image_url) = &self.image_url {
            updated.image_url = image_url.trim().to_string();
        }
        if let Some(category) = &self.category {
            updated.category = category.trim().to_string();
        }
        updated
    }
}

// =============================================================================
// User
// =============================================================================

/// A storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Unique among users.
    pub username: String,
    pub is_admin: bool,
}

/// Sign-up profile: a user without id and admin flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
}

impl NewUser {
    /// Turns the profile into a regular (non-admin) user.
    pub fn into_user(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            username: self.username,
            is_admin: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sonho() -> Product {
        Product {
            id: "6".to_string(),
            name: "Sonho".to_string(),
            description: "Sonho recheado".to_string(),
            price_cents: 350,
            expiration_date: NaiveDate::from_ymd_opt(2024, 3, 23).unwrap(),
            discount_percentage: 15,
            image_url: String::new(),
            category: "Doces".to_string(),
            quantity: 20,
        }
    }

    #[test]
    fn test_discount_rate_clamps() {
        assert_eq!(DiscountRate::from_percent(30).percent(), 30);
        assert_eq!(DiscountRate::from_percent(250).percent(), 100);
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_product_discounted_price() {
        let product = sonho();
        assert!(product.has_discount());
        assert_eq!(product.discounted_price().cents(), 298);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(sonho()).unwrap();
        assert_eq!(json["price"], 3.5);
        assert!(json.get("priceCents").is_none());
        assert_eq!(json["discountPercentage"], 15);
        assert_eq!(json["expirationDate"], "2024-03-23");
        assert_eq!(json["imageUrl"], "");
    }

    #[test]
    fn test_product_json_roundtrip_keeps_cents() {
        let json = serde_json::to_string(&sonho()).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sonho());
    }

    #[test]
    fn test_product_changes_apply() {
        let changes = ProductChanges {
            name: Some("  Sonho de Creme ".to_string()),
            price_cents: Some(400),
            ..Default::default()
        };
        assert!(!changes.is_empty());

        let updated = changes.apply_to(&sonho());
        assert_eq!(updated.name, "Sonho de Creme");
        assert_eq!(updated.price_cents, 400);
        assert_eq!(updated.discount_percentage, 15);
        assert_eq!(updated.id, "6");
    }

    #[test]
    fn test_new_user_is_never_admin() {
        let user = NewUser {
            name: "Maria".to_string(),
            phone: "11999999999".to_string(),
            email: "maria@example.com".to_string(),
            username: "maria".to_string(),
        }
        .into_user("2");

        assert_eq!(user.id, "2");
        assert!(!user.is_admin);
    }
}
