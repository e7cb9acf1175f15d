//! Shared types for the Coop storefront
//!
//! Common types used by both the catalog server and the shopper client:
//! data models, error types with HTTP status mapping, and wire payloads.

pub mod error;
pub mod models;
pub mod payloads;

/// Fixed service path prefix for every storefront route
pub const API_PREFIX: &str = "/api/store";

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{NewUser, Product, ProductDraft, ProductPatch, User};
