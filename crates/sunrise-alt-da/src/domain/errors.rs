//! # Domain Errors
//!
//! Error taxonomy for the store adapter.
//!
//! | Error | Raised by | Handling |
//! |-------|-----------|----------|
//! | [`ConfigError`] | configuration validation | fatal at startup |
//! | [`InvalidCommitment`] | commitment decoding | returned to the caller, never coerced |
//! | [`StoreError`] | Put/Get against the backend | surfaced to the server shell |

use thiserror::Error;

/// Boxed transport error kept for diagnostics.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration errors. Any of these stops the process before a server starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Backend is enabled but a mandatory field is empty.
    #[error("all Sunrise flags must be set: missing {0}")]
    MissingField(&'static str),

    /// Namespace is not valid hex.
    #[error("malformed namespace {namespace:?}: {reason}")]
    MalformedNamespace {
        /// Namespace as supplied
        namespace: String,
        /// Hex decoder message
        reason: String,
    },

    /// Endpoint is not an absolute http(s) URL.
    #[error("malformed endpoint {endpoint:?}: {reason}")]
    MalformedEndpoint {
        /// Endpoint as supplied
        endpoint: String,
        /// Parser message
        reason: String,
    },

    /// Shard counts must be positive.
    #[error("invalid shard count: {0} must be greater than zero")]
    InvalidShardCount(&'static str),
}

/// A commitment could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCommitment {
    /// No bytes at all.
    #[error("invalid commitment: empty input")]
    Empty,

    /// Version byte belongs to another scheme.
    #[error("invalid commitment: version byte {found:#04x}, expected {expected:#04x}")]
    VersionMismatch {
        /// Version byte this codec accepts
        expected: u8,
        /// Version byte found in the input
        found: u8,
    },

    /// Alt-DA commitment type other than generic.
    #[error("invalid commitment: unsupported commitment type {0:#04x}")]
    UnsupportedType(u8),

    /// Hex text in a request path could not be decoded.
    #[error("invalid commitment: malformed hex: {0}")]
    MalformedHex(String),
}

/// Errors returned by Put/Get.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Publish request could not be sent, or the service rejected it.
    #[error("put failed against {endpoint}: {source}")]
    PutFailed {
        /// Publish URL
        endpoint: String,
        /// Underlying transport error
        source: BoxError,
    },

    /// Fetch request could not be sent, failed, or timed out.
    #[error("get failed for locator {locator}: {source}")]
    GetFailed {
        /// Locator being fetched
        locator: String,
        /// Underlying transport error
        source: BoxError,
    },

    /// Service answered with a body this adapter cannot interpret.
    #[error("failed to decode {operation} response: {reason}")]
    DecodeFailed {
        /// `publish` or `get-blob`
        operation: &'static str,
        /// Parser message
        reason: String,
    },

    /// Service has no blob content for the locator.
    #[error("blob not found for locator {locator}")]
    NotFound {
        /// Locator that resolved to nothing
        locator: String,
    },
}

impl StoreError {
    pub(crate) fn put_failed(endpoint: &str, source: impl Into<BoxError>) -> Self {
        Self::PutFailed {
            endpoint: endpoint.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn get_failed(locator: &str, source: impl Into<BoxError>) -> Self {
        Self::GetFailed {
            locator: locator.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn decode_failed(operation: &'static str, reason: impl ToString) -> Self {
        Self::DecodeFailed {
            operation,
            reason: reason.to_string(),
        }
    }

    /// True for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
