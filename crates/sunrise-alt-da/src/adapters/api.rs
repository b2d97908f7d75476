//! Request/response models of the Sunrise data publishing API.
//!
//! Only the fields this adapter reads or writes are modelled.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Publish route, relative to the service endpoint.
pub const PUBLISH_PATH: &str = "/api/publish";

/// Fetch route, relative to the service endpoint.
pub const GET_BLOB_PATH: &str = "/api/get-blob";

/// Query parameter carrying the locator on fetch.
pub const METADATA_URI_PARAM: &str = "metadata_uri";

/// Storage protocol requested for every published blob.
pub const PROTOCOL_IPFS: &str = "ipfs";

/// `POST /api/publish` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    /// Blob, standard base64 with padding.
    pub blob: String,
    pub data_shard_count: u32,
    pub parity_shard_count: u32,
    pub protocol: String,
}

impl PublishRequest {
    pub fn new(data: &[u8], data_shard_count: u32, parity_shard_count: u32) -> Self {
        Self {
            blob: STANDARD.encode(data),
            data_shard_count,
            parity_shard_count,
            protocol: PROTOCOL_IPFS.to_string(),
        }
    }
}

/// `POST /api/publish` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub metadata_uri: String,
}

/// `GET /api/get-blob` response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlobResponse {
    /// Blob, standard base64 with padding. Empty when the service has nothing.
    #[serde(default)]
    pub blob: String,
}

impl GetBlobResponse {
    pub fn new(data: &[u8]) -> Self {
        Self {
            blob: STANDARD.encode(data),
        }
    }

    /// Decode the blob field.
    pub fn decode_blob(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.blob.as_bytes())
    }
}
