//! Coop Client - shopper-side engine for the Coop storefront
//!
//! Owns the session cart: an ordered ledger of product snapshots persisted
//! wholesale to a single local slot on every mutation, plus the one-shot
//! catalog sync client and the pure checkout derivation.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod slot;

pub use cart::{CartEngine, CartLine};
pub use catalog::CatalogClient;
pub use checkout::CheckoutSummary;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use slot::{CartSlot, FileSlot, MemorySlot};

// Re-export shared types for convenience
pub use shared::models::{NewUser, Product, ProductDraft, ProductPatch, User};
