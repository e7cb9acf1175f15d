//! Data models
//!
//! Shared between the catalog server and the shopper client (via API).

pub mod product;
pub mod user;

// Re-exports
pub use product::*;
pub use user::*;
