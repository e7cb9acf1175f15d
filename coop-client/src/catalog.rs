//! Catalog sync client
//!
//! One-shot fetch against the server's catalog surface. No cache, no delta
//! protocol, no retry loop: callers re-fetch when they want fresher data.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::error::ErrorBody;
use shared::models::{NewUser, Product, ProductDraft, ProductPatch, User};
use shared::payloads::{
    HealthResponse, InitProductsResponse, MessageResponse, ProductResponse, ProductsResponse,
    UserResponse,
};
use shared::API_PREFIX;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the storefront API
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Fetch the full current catalog
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        debug!("fetching product catalog");
        let response = self.client.get(self.url("/products")).send().await?;
        let body: ProductsResponse = expect_json(response).await?;
        Ok(body.products)
    }

    /// Create a product from a structured draft
    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let response = self
            .client
            .post(self.url("/products"))
            .json(draft)
            .send()
            .await?;
        let body: ProductResponse = expect_json(response).await?;
        Ok(body.product)
    }

    /// Apply a partial update to an existing product
    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> ClientResult<Product> {
        let response = self
            .client
            .put(self.url(&format!("/products/{}", id)))
            .json(patch)
            .send()
            .await?;
        let body: ProductResponse = expect_json(response).await?;
        Ok(body.product)
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: &str) -> ClientResult<String> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{}", id)))
            .send()
            .await?;
        let body: MessageResponse = expect_json(response).await?;
        Ok(body.message)
    }

    /// Seed the catalog with the starter set if it is empty
    pub async fn init_products(&self) -> ClientResult<InitProductsResponse> {
        let response = self.client.post(self.url("/init-products")).send().await?;
        expect_json(response).await
    }

    /// Register a new account with the identity provider
    pub async fn signup(&self, new_user: &NewUser) -> ClientResult<User> {
        let response = self
            .client
            .post(self.url("/signup"))
            .json(new_user)
            .send()
            .await?;
        let body: UserResponse = expect_json(response).await?;
        Ok(body.user)
    }

    /// Probe server liveness
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;
        expect_json(response).await
    }
}

/// Decode a success body, or surface the server's `{error}` message
async fn expect_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
