//! Seed route

use axum::routing::post;
use axum::{Json, Router, extract::State};
use shared::error::AppResult;
use shared::payloads::InitProductsResponse;

use crate::seed;
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/init-products", post(init_products))
}

/// POST /init-products - seed the starter catalog, idempotent
async fn init_products(
    State(state): State<ServerState>,
) -> AppResult<Json<InitProductsResponse>> {
    let outcome = seed::init_products(&state.catalog)?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::TestApp;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use shared::payloads::InitProductsResponse;

    #[tokio::test]
    async fn test_init_twice_keeps_count_stable() {
        let app = TestApp::new();

        let mut counts = Vec::new();
        for _ in 0..2 {
            let response = app
                .call(
                    Request::post("/api/store/init-products")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await;
            assert_eq!(response.status(), StatusCode::OK);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: InitProductsResponse = serde_json::from_slice(&bytes).unwrap();
            counts.push(body.count);
        }

        assert_eq!(counts[0], counts[1]);
        assert_eq!(app.state.catalog.count().unwrap(), counts[0]);
    }
}
