//! # Outbound Ports
//!
//! The generic blob store the DA server talks to.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Commitment, CommitmentCodec, StoreError};

/// Blob store backing the DA server - outbound port.
///
/// `put` returns a versioned commitment. `get` takes the payload of that
/// commitment (the locator), not the commitment itself; callers decode with
/// [`DaStore::codec`] first.
#[async_trait]
pub trait DaStore: Send + Sync {
    /// Store a blob and return its commitment.
    async fn put(&self, data: &[u8]) -> Result<Commitment, StoreError>;

    /// Fetch a blob by locator.
    async fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError>;

    /// Codec matching the commitments this store produces.
    fn codec(&self) -> CommitmentCodec;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

// =============================================================================
// In-memory implementation for testing
// =============================================================================

/// In-memory store. Locators are `mem://<n>`.
pub struct InMemoryDaStore {
    codec: CommitmentCodec,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    next_id: AtomicU64,
    /// Fail every call with a transport error.
    pub should_fail: bool,
}

impl Default for InMemoryDaStore {
    fn default() -> Self {
        Self::new(CommitmentCodec::sunrise())
    }
}

impl InMemoryDaStore {
    pub fn new(codec: CommitmentCodec) -> Self {
        Self {
            codec,
            blobs: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            should_fail: false,
        }
    }

    /// Store that fails every Put and Get.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }
}

#[async_trait]
impl DaStore for InMemoryDaStore {
    async fn put(&self, data: &[u8]) -> Result<Commitment, StoreError> {
        if self.should_fail {
            return Err(StoreError::put_failed(
                "mem://",
                std::io::Error::new(std::io::ErrorKind::Other, "mock failure"),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let locator = format!("mem://{}", id);
        self.blobs.lock().insert(locator.clone(), data.to_vec());
        Ok(self.codec.encode(locator.as_bytes()))
    }

    async fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        let locator = String::from_utf8_lossy(key).into_owned();
        if self.should_fail {
            return Err(StoreError::get_failed(
                &locator,
                std::io::Error::new(std::io::ErrorKind::Other, "mock failure"),
            ));
        }

        self.blobs
            .lock()
            .get(&locator)
            .cloned()
            .ok_or(StoreError::NotFound { locator })
    }

    fn codec(&self) -> CommitmentCodec {
        self.codec
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
