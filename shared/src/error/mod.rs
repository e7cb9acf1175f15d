//! Unified error system for the Coop storefront
//!
//! - [`ErrorCode`]: standardized error codes shared across server and client
//! - [`AppError`]: error type carrying a code and a human-readable message
//! - HTTP status mapping and the `{"error": "..."}` response body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Identity errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
