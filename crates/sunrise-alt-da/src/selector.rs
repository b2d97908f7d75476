//! # Backend Selector
//!
//! Turns [`BackendSettings`] into a single concrete store. Sunrise is the only
//! backend today; new backends become new [`StoreBackend`] variants.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, Span};

use crate::adapters::SunriseStore;
use crate::domain::{BackendSettings, Commitment, CommitmentCodec, ConfigError, StoreError};
use crate::ports::DaStore;

/// Errors from [`StoreBackend::select`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Every backend is disabled.
    #[error("no alt-DA backend configured")]
    NoBackendConfigured,

    /// An enabled backend has invalid settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The store selected at startup.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Sunrise(SunriseStore),
}

impl StoreBackend {
    /// Pick the enabled backend.
    ///
    /// The store logs under a child of `span` named after the backend.
    pub fn select(settings: &BackendSettings, span: &Span) -> Result<Self, SelectorError> {
        if settings.sunrise.is_enabled() {
            let config = settings.sunrise.build()?;
            let store_span = tracing::info_span!(parent: span, "store", backend = "sunrise");
            info!(parent: span, endpoint = config.endpoint(), "using sunrise store");
            return Ok(Self::Sunrise(SunriseStore::new(config, store_span)));
        }
        Err(SelectorError::NoBackendConfigured)
    }

    fn inner(&self) -> &dyn DaStore {
        match self {
            Self::Sunrise(store) => store,
        }
    }
}

#[async_trait]
impl DaStore for StoreBackend {
    async fn put(&self, data: &[u8]) -> Result<Commitment, StoreError> {
        self.inner().put(data).await
    }

    async fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        self.inner().get(key).await
    }

    fn codec(&self) -> CommitmentCodec {
        self.inner().codec()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
