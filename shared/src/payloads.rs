//! Wire payloads for the storefront API
//!
//! Response bodies the server produces and the client parses. Error responses
//! always use [`crate::error::ErrorBody`].

use crate::models::{Product, User};
use serde::{Deserialize, Serialize};

/// `GET /products`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `POST /products`, `PUT /products/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// `DELETE /products/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /init-products`
///
/// `products` is present only when this call actually seeded the catalog.
#[derive(Debug, Serialize, Deserialize)]
pub struct InitProductsResponse {
    pub message: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

/// `POST /signup`
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
