//! Shared server state
//!
//! The ambient catalog/identity/blob collaborators are owned by one state
//! object and threaded through the routers via axum state, never held as
//! globals.

use std::path::Path;
use std::sync::Arc;

use crate::blob::{BlobSink, HttpBlobSink};
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::identity::{IdentityProvider, LocalIdentity};

/// Database file name under the working directory
const CATALOG_DB_FILE: &str = "catalog.redb";

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogStore,
    pub blob: Arc<dyn BlobSink>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl ServerState {
    /// Initialize state from configuration: open the catalog database and
    /// wire up the external seams.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let catalog = CatalogStore::open(Path::new(&config.work_dir).join(CATALOG_DB_FILE))?;

        let blob: Arc<dyn BlobSink> = Arc::new(HttpBlobSink::new(
            &config.blob_endpoint,
            &config.blob_public_url,
            &config.blob_bucket,
        ));
        let identity: Arc<dyn IdentityProvider> = Arc::new(LocalIdentity::new());

        tracing::info!(work_dir = %config.work_dir, "Server state initialized");
        Ok(Self {
            config: config.clone(),
            catalog,
            blob,
            identity,
        })
    }

    /// Build state with explicit collaborators (tests, embedding)
    pub fn with_parts(
        config: Config,
        catalog: CatalogStore,
        blob: Arc<dyn BlobSink>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            config,
            catalog,
            blob,
            identity,
        }
    }
}
