//! Signup route
//!
//! Thin pass-through to the identity provider; the storefront never stores
//! credentials itself.

use axum::routing::post;
use axum::{Json, Router, extract::State};
use shared::error::{AppError, AppResult};
use shared::models::NewUser;
use shared::payloads::UserResponse;
use validator::Validate;

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/signup", post(signup))
}

/// POST /signup - create a user with the opaque identity provider
async fn signup(
    State(state): State<ServerState>,
    Json(new_user): Json<NewUser>,
) -> AppResult<Json<UserResponse>> {
    new_user
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.identity.create_user(new_user).await?;
    tracing::info!(email = %user.email, role = %user.role, "User signed up");
    Ok(Json(UserResponse { user }))
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::TestApp;
    use axum::body::Body;
    use http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use shared::error::ErrorBody;
    use shared::payloads::UserResponse;

    fn signup_request(body: &str) -> Request<Body> {
        Request::post("/api/store/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const SIGNUP_JSON: &str =
        r#"{"email":"asha@example.com","password":"secret1","name":"Asha","role":"admin"}"#;

    #[tokio::test]
    async fn test_signup_returns_user_with_role() {
        let app = TestApp::new();

        let response = app.call(signup_request(SIGNUP_JSON)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: UserResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.user.email, "asha@example.com");
        assert_eq!(body.user.role, "admin");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_422_with_friendly_message() {
        let app = TestApp::new();

        app.call(signup_request(SIGNUP_JSON)).await;
        let response = app.call(signup_request(SIGNUP_JSON)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let err: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert!(err.error.contains("already been registered"));
    }

    #[tokio::test]
    async fn test_invalid_email_is_400() {
        let app = TestApp::new();

        let response = app
            .call(signup_request(
                r#"{"email":"nope","password":"secret1","name":"A"}"#,
            ))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
