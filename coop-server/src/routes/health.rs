//! Health check route

use axum::{Json, Router, routing::get};
use shared::payloads::HealthResponse;

use crate::state::ServerState;

/// Health router - public route (no authentication)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::TestApp;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use shared::payloads::HealthResponse;

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = TestApp::new();

        let response = app
            .call(Request::get("/api/store/health").body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "ok");
    }
}
