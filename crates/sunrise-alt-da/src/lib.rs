//! # Sunrise Alt-DA
//!
//! Alt-DA store adapter for the Sunrise data publishing service.
//!
//! A rollup batcher hands blobs to a DA server, which stores them off-chain
//! and returns a short commitment to post on the settlement layer. This crate
//! is the storage side of that server:
//! - a commitment codec (`[0x0c][metadata_uri]`)
//! - validated backend settings
//! - [`SunriseStore`], the HTTP adapter doing Put/Get against Sunrise
//! - [`StoreBackend`], which picks the configured backend at startup
//!
//! ## Module Structure
//!
//! ```text
//! sunrise-alt-da/
//! ├── domain/      # Commitment codec, settings, errors
//! ├── ports/       # DaStore trait + in-memory double
//! ├── adapters/    # Sunrise HTTP adapter and wire models
//! └── selector.rs  # Backend selection
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod selector;

// Re-exports
pub use adapters::{SunriseStore, DEFAULT_GET_TIMEOUT};
pub use domain::{
    decode_wire, parse_hex, to_hex, BackendSettings, BoxError, Commitment, CommitmentCodec,
    CommitmentType, ConfigError, InvalidCommitment, StoreConfig, StoreError, SunriseSettings,
    DEFAULT_DATA_SHARD_COUNT, DEFAULT_PARITY_SHARD_COUNT, SUNRISE_VERSION_BYTE,
};
pub use ports::{DaStore, InMemoryDaStore};
pub use selector::{SelectorError, StoreBackend};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
