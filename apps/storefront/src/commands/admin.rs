//! # Admin Commands
//!
//! Catalog management for administrators: add, edit, delete.
//!
//! ## Access
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Command Guard                                  │
//! │                                                                         │
//! │  create_product / update_product / delete_product                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  require_admin(session) ── not signed in / not admin ──► FORBIDDEN      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductForm (raw text) ── parse ──► NewProduct / ProductChanges        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.products().insert / update / delete                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use padaria_core::{Money, NewProduct, Product, ProductChanges, User, ValidationError};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// Category given to products added without one.
pub const DEFAULT_CATEGORY: &str = "Outros";

/// Shown when a required form field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios";

/// Ensures the signed-in user is an administrator.
pub fn require_admin(session: &SessionState) -> Result<User, ApiError> {
    match session.current_user() {
        Some(user) if user.is_admin => Ok(user),
        Some(user) => {
            warn!(user_id = %user.id, "Admin command refused");
            Err(ApiError::forbidden(
                "Apenas administradores podem gerenciar produtos",
            ))
        }
        None => Err(ApiError::forbidden("Faça login como administrador")),
    }
}

/// Raw text of the admin product form.
///
/// Blank fields mean "not given": required on create, unchanged on edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Decimal text, "12.50" or "12,50".
    pub price: String,
    pub discount: String,
    pub image_url: String,
    pub category: String,
}

impl ProductForm {
    /// Builds a new product. Name, description and price are required.
    pub fn to_new_product(&self) -> Result<NewProduct, ApiError> {
        if is_blank(&self.name) || is_blank(&self.description) || is_blank(&self.price) {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let category = if is_blank(&self.category) {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category.trim().to_string()
        };

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price_cents: Money::parse(&self.price)?.cents(),
            expiration_date: None,
            discount_percentage: parse_discount(&self.discount)?.unwrap_or(0),
            image_url: self.image_url.trim().to_string(),
            category,
            quantity: 0,
        })
    }

    /// Builds the changes for an edit; blank fields stay as they are.
    pub fn to_changes(&self) -> Result<ProductChanges, ApiError> {
        let text = |value: &str| (!is_blank(value)).then(|| value.trim().to_string());

        let price_cents = if is_blank(&self.price) {
            None
        } else {
            Some(Money::parse(&self.price)?.cents())
        };

        Ok(ProductChanges {
            name: text(&self.name),
            description: text(&self.description),
            price_cents,
            discount_percentage: parse_discount(&self.discount)?,
            image_url: text(&self.image_url),
            category: text(&self.category),
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_discount(text: &str) -> Result<Option<u32>, ValidationError> {
    let text = text.trim().trim_end_matches('%').trim_end();
    if text.is_empty() {
        return Ok(None);
    }

    text.parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: "must be a whole percentage like 15".to_string(),
        })
}

/// Adds a product to the catalog.
pub async fn create_product(
    store: &StoreState,
    session: &SessionState,
    form: &ProductForm,
) -> Result<Product, ApiError> {
    let admin = require_admin(session)?;
    debug!(name = %form.name, "create_product command");

    let new = form.to_new_product()?;
    let product = store.inner().products().insert(new).await?;

    info!(admin = %admin.id, product_id = %product.id, name = %product.name, "Product added");
    Ok(product)
}

/// Edits a product.
pub async fn update_product(
    store: &StoreState,
    session: &SessionState,
    id: &str,
    form: &ProductForm,
) -> Result<Product, ApiError> {
    let admin = require_admin(session)?;
    debug!(id = %id, "update_product command");

    let changes = form.to_changes()?;
    if changes.is_empty() {
        return Err(ApiError::validation("Nenhuma alteração informada"));
    }

    let product = store.inner().products().update(id, &changes).await?;
    info!(admin = %admin.id, product_id = %product.id, "Product updated");
    Ok(product)
}

/// Removes a product. The caller asks for confirmation first.
pub async fn delete_product(
    store: &StoreState,
    session: &SessionState,
    id: &str,
) -> Result<Product, ApiError> {
    let admin = require_admin(session)?;
    debug!(id = %id, "delete_product command");

    let product = store.inner().products().delete(id).await?;
    info!(admin = %admin.id, product_id = %product.id, "Product deleted");
    Ok(product)
}
