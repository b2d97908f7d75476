//! Error types for the DA server.

use sunrise_alt_da::ConfigError;
use thiserror::Error;

/// Server lifecycle errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// `start` called on a running server.
    #[error("server already started")]
    AlreadyStarted,

    /// `stop` called on a server that is not running.
    #[error("server not started")]
    NotStarted,

    /// Serve loop exited abnormally.
    #[error("server error: {0}")]
    Serve(String),
}

/// Invalid command line or environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// `--addr` is empty.
    #[error("listen address must be set")]
    MissingAddr,

    /// Only generic commitments can be served.
    #[error("generic commitments must be enabled")]
    GenericCommitmentRequired,

    /// Backend flags are invalid.
    #[error(transparent)]
    Backend(#[from] ConfigError),
}

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Log level directive could not be parsed.
    #[error("invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
