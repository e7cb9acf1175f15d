//! Blob sink - external binary-object hosting seam
//!
//! Uploaded product images go to an external blob host; the catalog only ever
//! stores the publicly resolvable URI it hands back. One at-least-once call,
//! no timeout or retry layered on top: failure propagates and aborts the
//! surrounding creation.

use async_trait::async_trait;
use shared::error::AppError;
use thiserror::Error;

/// Blob sink errors
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Blob upload failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Blob sink rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<BlobError> for AppError {
    fn from(err: BlobError) -> Self {
        AppError::upstream(err.to_string())
    }
}

/// URI-producing sink for uploaded binary objects
#[async_trait]
pub trait BlobSink: Send + Sync {
    /// Store one object and return its publicly resolvable URI
    async fn store(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobError>;
}

/// HTTP blob sink: a single `PUT` per object against the configured endpoint
pub struct HttpBlobSink {
    client: reqwest::Client,
    endpoint: String,
    public_url: String,
    bucket: String,
}

impl HttpBlobSink {
    pub fn new(
        endpoint: impl Into<String>,
        public_url: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            public_url: public_url.into(),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BlobSink for HttpBlobSink {
    async fn store(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobError> {
        let upload_url = format!("{}/{}/{}", self.endpoint, self.bucket, object_name);

        let response = self
            .client
            .put(&upload_url)
            .header(http::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BlobError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(object = %object_name, "Uploaded product image to blob sink");
        Ok(format!("{}/{}/{}", self.public_url, self.bucket, object_name))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Recording sink for tests: remembers uploads, returns a fake public URI
    #[derive(Default)]
    pub struct MemorySink {
        pub uploads: Mutex<Vec<(String, usize, String)>>,
    }

    #[async_trait]
    impl BlobSink for MemorySink {
        async fn store(
            &self,
            object_name: &str,
            bytes: Vec<u8>,
            content_type: &str,
        ) -> Result<String, BlobError> {
            self.uploads.lock().unwrap().push((
                object_name.to_string(),
                bytes.len(),
                content_type.to_string(),
            ));
            Ok(format!("https://blobs.test/product-images/{}", object_name))
        }
    }

    /// Sink that always fails, for abort-path tests
    pub struct FailingSink;

    #[async_trait]
    impl BlobSink for FailingSink {
        async fn store(
            &self,
            _object_name: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> Result<String, BlobError> {
            Err(BlobError::Rejected {
                status: 503,
                message: "bucket unavailable".into(),
            })
        }
    }
}
