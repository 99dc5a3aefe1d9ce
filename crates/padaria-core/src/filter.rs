//! # Catalog Filtering
//!
//! Search-and-browse over the product list.
//!
//! ```text
//! result = [ p in products | (q empty  or  lower(p.name) contains lower(q))
//!                        and (c absent or  p.category == c) ]
//! ```
//!
//! Source order is preserved. The category chip list is the set of distinct
//! categories in order of first appearance.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Search text plus an optional selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductFilter {
    /// Name substring, case-insensitive. Surrounding whitespace is ignored.
    pub query: String,

    /// Exact category label, or `None` for all categories.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Filter that matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Name search only.
    pub fn search(query: impl Into<String>) -> Self {
        ProductFilter {
            query: query.into(),
            category: None,
        }
    }

    /// Category only.
    pub fn category(category: impl Into<String>) -> Self {
        ProductFilter {
            query: String::new(),
            category: Some(category.into()),
        }
    }

    /// Returns a copy with the category replaced.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Returns true when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_none()
    }

    /// Whether `product` passes both constraints.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.trim().to_lowercase();
        let name_ok = needle.is_empty() || product.name.to_lowercase().contains(&needle);
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| product.category == c);

        name_ok && category_ok
    }

    /// Returns the matching products in source order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Distinct categories in order of first occurrence.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
