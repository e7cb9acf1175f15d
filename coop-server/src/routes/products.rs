//! Catalog routes
//!
//! Shopper-facing listing plus the admin CRUD surface. `POST /products`
//! accepts both ingestion encodings and dispatches on the request
//! content type.

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::{AppError, AppResult};
use shared::models::{ProductDraft, ProductPatch};
use shared::payloads::{MessageResponse, ProductResponse, ProductsResponse};

use crate::ingest;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            put(update_product).delete(delete_product),
        )
}

/// GET /products - full catalog snapshot
async fn list_products(State(state): State<ServerState>) -> AppResult<Json<ProductsResponse>> {
    let products = state.catalog.list()?;
    Ok(Json(ProductsResponse { products }))
}

/// POST /products - dual-encoded ingestion
///
/// Structured JSON and the multipart field-set both normalize into one
/// canonical draft before the store is touched.
async fn create_product(
    State(state): State<ServerState>,
    request: Request,
) -> AppResult<Json<ProductResponse>> {
    let content_type = request
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let draft = if content_type.starts_with("application/json") {
        let Json(draft): Json<ProductDraft> = Json::from_request(request, &())
            .await
            .map_err(|e| AppError::invalid_request(e.to_string()))?;
        ingest::validate_draft(draft)?
    } else if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::invalid_request(e.to_string()))?;
        ingest::draft_from_multipart(multipart, state.blob.as_ref()).await?
    } else {
        return Err(AppError::invalid_request(format!(
            "Unsupported content type: {:?}",
            content_type
        )));
    };

    let product = state.catalog.create(draft)?;
    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok(Json(ProductResponse { product }))
}

/// PUT /products/{id} - partial patch merge
async fn update_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.catalog.update(&id, patch)?;
    tracing::info!(id = %product.id, "Product updated");
    Ok(Json(ProductResponse { product }))
}

/// DELETE /products/{id}
async fn delete_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.delete(&id)?;
    tracing::info!(id = %id, "Product deleted");
    Ok(Json(MessageResponse {
        message: "Product deleted successfully".into(),
    }))
}
