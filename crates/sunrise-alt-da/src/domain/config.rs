//! # Store Configuration
//!
//! [`SunriseSettings`] holds the backend fields exactly as supplied by flags or
//! environment. [`SunriseSettings::build`] validates them once and produces a
//! [`StoreConfig`], which is immutable and always well formed.

use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::ConfigError;

/// Default erasure-coding data shards requested from the publishing service.
pub const DEFAULT_DATA_SHARD_COUNT: u32 = 10;

/// Default erasure-coding parity shards requested from the publishing service.
pub const DEFAULT_PARITY_SHARD_COUNT: u32 = 10;

/// Sunrise backend settings as supplied by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunriseSettings {
    /// Publishing service base URL.
    pub endpoint: String,
    /// Namespace, hex encoded.
    pub namespace: String,
    /// Data shards per published blob.
    pub data_shard_count: u32,
    /// Parity shards per published blob.
    pub parity_shard_count: u32,
}

impl Default for SunriseSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            namespace: String::new(),
            data_shard_count: DEFAULT_DATA_SHARD_COUNT,
            parity_shard_count: DEFAULT_PARITY_SHARD_COUNT,
        }
    }
}

impl SunriseSettings {
    /// Settings with default shard counts.
    pub fn new(endpoint: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// True when any backend-identifying field is set.
    pub fn is_enabled(&self) -> bool {
        !(self.endpoint.is_empty() && self.namespace.is_empty())
    }

    /// Check the settings without building anything.
    ///
    /// A disabled backend is always valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.check().map(|_| ())
    }

    /// Validate and decode into a [`StoreConfig`].
    pub fn build(&self) -> Result<StoreConfig, ConfigError> {
        if !self.is_enabled() {
            return Err(ConfigError::MissingField("endpoint"));
        }
        self.check()
    }

    fn check(&self) -> Result<StoreConfig, ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingField("endpoint"));
        }
        if self.namespace.is_empty() {
            return Err(ConfigError::MissingField("namespace"));
        }

        let namespace =
            hex::decode(&self.namespace).map_err(|e| ConfigError::MalformedNamespace {
                namespace: self.namespace.clone(),
                reason: e.to_string(),
            })?;

        let endpoint = parse_endpoint(&self.endpoint)?;

        if self.data_shard_count == 0 {
            return Err(ConfigError::InvalidShardCount("data_shard_count"));
        }
        if self.parity_shard_count == 0 {
            return Err(ConfigError::InvalidShardCount("parity_shard_count"));
        }

        Ok(StoreConfig {
            endpoint,
            namespace,
            data_shard_count: self.data_shard_count,
            parity_shard_count: self.parity_shard_count,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<String, ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| malformed(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(malformed(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.query().is_some() {
        return Err(malformed("query strings are not allowed".to_string()));
    }

    Ok(endpoint.trim_end_matches('/').to_string())
}

/// Validated Sunrise store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    endpoint: String,
    namespace: Vec<u8>,
    data_shard_count: u32,
    parity_shard_count: u32,
}

impl StoreConfig {
    /// Base URL without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Decoded namespace bytes.
    pub fn namespace(&self) -> &[u8] {
        &self.namespace
    }

    pub fn data_shard_count(&self) -> u32 {
        self.data_shard_count
    }

    pub fn parity_shard_count(&self) -> u32 {
        self.parity_shard_count
    }
}

/// Settings for every backend the selector knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Sunrise publishing service.
    pub sunrise: SunriseSettings,
}

impl BackendSettings {
    /// Validate every enabled backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sunrise.validate()
    }

    /// True when at least one backend is enabled.
    pub fn any_enabled(&self) -> bool {
        self.sunrise.is_enabled()
    }
}
