//! # Sunrise Store
//!
//! [`DaStore`] over the Sunrise data publishing HTTP API.
//!
//! Put posts the blob to `/api/publish` and wraps the returned metadata URI in
//! a Sunrise commitment. Get takes that metadata URI back and fetches the blob
//! from `/api/get-blob`. Put has no deadline of its own; Get is bounded by
//! [`DEFAULT_GET_TIMEOUT`] regardless of what the caller does.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn, Span};

use super::api::{
    GetBlobResponse, PublishRequest, PublishResponse, GET_BLOB_PATH, METADATA_URI_PARAM,
    PUBLISH_PATH,
};
use crate::domain::{Commitment, CommitmentCodec, StoreConfig, StoreError};
use crate::ports::DaStore;

/// Upper bound on a single Get, including the body read.
pub const DEFAULT_GET_TIMEOUT: Duration = Duration::from_secs(60);

/// Sunrise-backed blob store.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct SunriseStore {
    client: reqwest::Client,
    config: Arc<StoreConfig>,
    codec: CommitmentCodec,
    publish_url: String,
    get_blob_url: String,
    get_timeout: Duration,
    span: Span,
}

impl SunriseStore {
    /// Create a store with a fresh HTTP client. Log events go under `span`.
    pub fn new(config: StoreConfig, span: Span) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(config, client, span)
    }

    /// Create a store on a caller-supplied HTTP client.
    pub fn with_client(config: StoreConfig, client: reqwest::Client, span: Span) -> Self {
        let publish_url = format!("{}{}", config.endpoint(), PUBLISH_PATH);
        let get_blob_url = format!("{}{}", config.endpoint(), GET_BLOB_PATH);
        Self {
            client,
            config: Arc::new(config),
            codec: CommitmentCodec::sunrise(),
            publish_url,
            get_blob_url,
            get_timeout: DEFAULT_GET_TIMEOUT,
            span,
        }
    }

    /// Override the Get deadline.
    pub fn with_get_timeout(mut self, timeout: Duration) -> Self {
        self.get_timeout = timeout;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn get_timeout(&self) -> Duration {
        self.get_timeout
    }

    async fn publish(&self, data: &[u8]) -> Result<String, StoreError> {
        let request = PublishRequest::new(
            data,
            self.config.data_shard_count(),
            self.config.parity_shard_count(),
        );

        let response = self
            .client
            .post(&self.publish_url)
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| StoreError::put_failed(&self.publish_url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::put_failed(&self.publish_url, e))?;

        let published: PublishResponse =
            serde_json::from_slice(&body).map_err(|e| StoreError::decode_failed("publish", e))?;

        if published.metadata_uri.is_empty() {
            return Err(StoreError::decode_failed(
                "publish",
                "response carried an empty metadata_uri",
            ));
        }
        Ok(published.metadata_uri)
    }

    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, StoreError> {
        let response = self
            .client
            .get(&self.get_blob_url)
            .query(&[(METADATA_URI_PARAM, locator)])
            .send()
            .await
            .map_err(|e| StoreError::get_failed(locator, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                locator: locator.to_string(),
            });
        }

        let response = response
            .error_for_status()
            .map_err(|e| StoreError::get_failed(locator, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::get_failed(locator, e))?;

        let envelope: GetBlobResponse =
            serde_json::from_slice(&body).map_err(|e| StoreError::decode_failed("get-blob", e))?;

        if envelope.blob.is_empty() {
            return Err(StoreError::NotFound {
                locator: locator.to_string(),
            });
        }

        envelope
            .decode_blob()
            .map_err(|e| StoreError::decode_failed("get-blob", e))
    }
}

#[async_trait]
impl DaStore for SunriseStore {
    async fn put(&self, data: &[u8]) -> Result<Commitment, StoreError> {
        debug!(parent: &self.span, size = data.len(), "publishing blob");

        let uri = match self.publish(data).await {
            Ok(uri) => uri,
            Err(e) => {
                warn!(parent: &self.span, error = %e, "blob publish failed");
                return Err(e);
            }
        };

        info!(parent: &self.span, metadata_uri = %uri, "blob successfully submitted");
        Ok(self.codec.encode(uri.as_bytes()))
    }

    async fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        let locator = std::str::from_utf8(key)
            .map_err(|e| StoreError::get_failed(&format!("0x{}", hex::encode(key)), e))?;

        info!(parent: &self.span, id = %hex::encode(key), "blob request");

        match tokio::time::timeout(self.get_timeout, self.fetch(locator)).await {
            Ok(Ok(blob)) => {
                debug!(parent: &self.span, size = blob.len(), "blob retrieved");
                Ok(blob)
            }
            Ok(Err(e)) => {
                warn!(parent: &self.span, error = %e, "blob fetch failed");
                Err(e)
            }
            Err(elapsed) => {
                warn!(parent: &self.span, timeout = ?self.get_timeout, "blob fetch timed out");
                Err(StoreError::get_failed(locator, elapsed))
            }
        }
    }

    fn codec(&self) -> CommitmentCodec {
        self.codec
    }

    fn name(&self) -> &'static str {
        "sunrise"
    }
}
