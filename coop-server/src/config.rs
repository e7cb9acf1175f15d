//! Server configuration

/// Configuration for the catalog server
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the catalog database
    pub work_dir: String,
    pub http_port: u16,
    pub environment: String,

    /// Blob sink endpoint the ingestion handler uploads images to
    pub blob_endpoint: String,
    /// Public base URL stored into `Product.image`
    pub blob_public_url: String,
    /// Bucket name under the blob sink
    pub blob_bucket: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/coop/store".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            blob_endpoint: std::env::var("BLOB_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".into()),
            blob_public_url: std::env::var("BLOB_PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:9000/public".into()),
            blob_bucket: std::env::var("BLOB_BUCKET")
                .unwrap_or_else(|_| "product-images".into()),
        }
    }

    /// Create a config with custom overrides
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
