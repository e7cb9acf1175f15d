//! Coop Storefront Server - catalog service for the Coop poultry shop
//!
//! # Module structure
//!
//! ```text
//! coop-server/src/
//! ├── catalog/       # redb-backed keyed product store
//! ├── routes/        # HTTP routes and middleware stack
//! ├── blob.rs        # blob-sink seam for uploaded images
//! ├── identity.rs    # identity-provider seam (signup)
//! ├── ingest.rs      # dual-encoding product ingestion
//! ├── seed.rs        # starter catalog
//! ├── config.rs      # env-driven configuration
//! ├── state.rs       # shared server state
//! └── server.rs      # HTTP server lifecycle
//! ```

pub mod blob;
pub mod catalog;
pub mod config;
pub mod identity;
pub mod ingest;
pub mod logger;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;

// Re-export public types
pub use catalog::{CatalogStore, StorageError, StorageResult};
pub use config::Config;
pub use server::Server;
pub use state::ServerState;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCode};
