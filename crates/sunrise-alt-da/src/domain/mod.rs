//! # Domain Module
//!
//! Commitment codec, store configuration and the error taxonomy.

pub mod commitment;
pub mod config;
pub mod errors;

pub use commitment::{
    decode_wire, parse_hex, to_hex, Commitment, CommitmentCodec, CommitmentType,
    SUNRISE_VERSION_BYTE,
};
pub use config::{
    BackendSettings, StoreConfig, SunriseSettings, DEFAULT_DATA_SHARD_COUNT,
    DEFAULT_PARITY_SHARD_COUNT,
};
pub use errors::{BoxError, ConfigError, InvalidCommitment, StoreError};
