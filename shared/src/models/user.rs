//! User Model
//!
//! Signup payload and the opaque user object the identity provider returns.
//! The storefront never stores credentials itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_role() -> String {
    "user".to_string()
}

/// Signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub name: String,
    /// Role claim, defaults to "user"; admins sign up with "admin"
    #[serde(default = "default_role")]
    pub role: String,
}

/// User object as returned by the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user() {
        let user: NewUser = serde_json::from_str(
            r#"{"email":"a@b.com","password":"secret1","name":"A"}"#,
        )
        .unwrap();
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_email_is_validated() {
        let user = NewUser {
            email: "not-an-email".into(),
            password: "secret1".into(),
            name: "A".into(),
            role: "user".into(),
        };
        assert!(user.validate().is_err());
    }
}
