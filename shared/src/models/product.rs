//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `id` is opaque and immutable once generated. `created_at` is stamped at
/// creation and never changed; `updated_at` is stamped only on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Non-negative price (whole currency units, fractional allowed)
    pub price: Decimal,
    /// Free-form sales unit, e.g. "kg" or "dozen"
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    /// Image URI, possibly empty
    #[serde(default)]
    pub image: String,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Canonical product-creation payload
///
/// Both ingestion encodings (structured JSON and multipart field-set)
/// normalize into this shape before anything is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub price: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    /// Ready image URI; empty when no image was provided
    #[serde(default)]
    pub image: String,
    pub stock: u32,
}

impl ProductDraft {
    /// Materialize a full product record with the injected id and stamp
    pub fn into_product(self, id: String, created_at: String) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            subcategory: self.subcategory,
            price: self.price,
            unit: self.unit,
            description: self.description,
            image: self.image,
            stock: self.stock,
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

/// Partial update payload
///
/// Fields left `None` keep the stored value. `id` and `created_at` are never
/// patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    /// Merge this patch over an existing record in place
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            product.subcategory = subcategory;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
