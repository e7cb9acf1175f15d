//! Identity provider seam
//!
//! Authentication and session issuance live outside the storefront. The
//! signup route only needs a provider that turns a signup payload into an
//! opaque user object with a role claim; everything else about identity is
//! somebody else's problem.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use shared::error::AppError;
use shared::models::{NewUser, User};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// Identity provider errors
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email already registered: {0}")]
    EmailExists(String),

    #[error("identity provider error: {0}")]
    Provider(String),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::EmailExists(_) => AppError::email_exists(),
            IdentityError::Provider(msg) => AppError::upstream(msg),
        }
    }
}

/// Opaque identity provider returning a user object and role claim
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, IdentityError>;
}

/// In-process identity provider
///
/// Email-keyed user registry for development and tests; stands in for the
/// hosted auth backend. Passwords are accepted and dropped - this provider
/// issues no sessions.
#[derive(Default)]
pub struct LocalIdentity {
    users: RwLock<HashMap<String, User>>,
}

impl LocalIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn create_user(&self, new_user: NewUser) -> Result<User, IdentityError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        if users.contains_key(&new_user.email) {
            return Err(IdentityError::EmailExists(new_user.email));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email.clone(),
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        users.insert(new_user.email, user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: "secret1".into(),
            name: "Asha".into(),
            role: "user".into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_returns_role_claim() {
        let identity = LocalIdentity::new();
        let user = identity.create_user(signup("asha@example.com")).await.unwrap();
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.role, "user");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let identity = LocalIdentity::new();
        identity.create_user(signup("asha@example.com")).await.unwrap();

        let err = identity
            .create_user(signup("asha@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::EmailExists(_)));

        let app_err: AppError = err.into();
        assert_eq!(app_err.http_status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
