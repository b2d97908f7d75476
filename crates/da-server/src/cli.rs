//! # Command Line
//!
//! Flags with `OP_PLASMA_DA_SERVER_*` environment fallbacks.

use clap::{ArgAction, Args as ClapArgs, Parser};
use sunrise_alt_da::{
    BackendSettings, SunriseSettings, DEFAULT_DATA_SHARD_COUNT, DEFAULT_PARITY_SHARD_COUNT,
};

use crate::error::ArgsError;
use crate::telemetry::{LogConfig, LogFormat};

/// Alt-DA server backed by the Sunrise data publishing service.
#[derive(Parser, Debug, Clone)]
#[command(name = "da-server", version)]
#[command(about = "Alt-DA server storing rollup batch data on Sunrise")]
pub struct Args {
    /// Server listening address
    #[arg(long, env = "OP_PLASMA_DA_SERVER_ADDR", required = true)]
    pub addr: String,

    /// Server listening port
    #[arg(long, env = "OP_PLASMA_DA_SERVER_PORT", required = true)]
    pub port: u16,

    /// Serve generic commitments
    #[arg(
        long = "generic-commitment",
        env = "OP_PLASMA_DA_SERVER_GENERIC_COMMITMENT",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub generic_commitment: bool,

    #[command(flatten)]
    pub sunrise: SunriseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Sunrise backend flags.
#[derive(ClapArgs, Debug, Clone)]
pub struct SunriseArgs {
    /// Sunrise data publishing service endpoint
    #[arg(
        long = "sunrise.server",
        env = "OP_PLASMA_DA_SERVER_SUNRISE_SERVER",
        default_value = "http://localhost:26658"
    )]
    pub server: String,

    /// Namespace ID, hex encoded
    #[arg(
        long = "sunrise.namespace",
        env = "OP_PLASMA_DA_SERVER_SUNRISE_NAMESPACE",
        default_value = ""
    )]
    pub namespace: String,

    /// Erasure-coding data shards per blob
    #[arg(
        long = "sunrise.data-shard-count",
        env = "OP_PLASMA_DA_SERVER_SUNRISE_DATA_SHARD_COUNT",
        default_value_t = DEFAULT_DATA_SHARD_COUNT
    )]
    pub data_shard_count: u32,

    /// Erasure-coding parity shards per blob
    #[arg(
        long = "sunrise.parity-shard-count",
        env = "OP_PLASMA_DA_SERVER_SUNRISE_PARITY_SHARD_COUNT",
        default_value_t = DEFAULT_PARITY_SHARD_COUNT
    )]
    pub parity_shard_count: u32,
}

/// Logging flags.
#[derive(ClapArgs, Debug, Clone)]
pub struct LogArgs {
    /// Log level or filter directive
    #[arg(
        long = "log.level",
        env = "OP_PLASMA_DA_SERVER_LOG_LEVEL",
        default_value = "info"
    )]
    pub level: String,

    /// Log output format
    #[arg(
        long = "log.format",
        env = "OP_PLASMA_DA_SERVER_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub format: LogFormat,

    /// Colorize text output
    #[arg(
        long = "log.color",
        env = "OP_PLASMA_DA_SERVER_LOG_COLOR",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub color: bool,
}

impl Args {
    /// Check server flags and every enabled backend.
    pub fn validate(&self) -> Result<(), ArgsError> {
        if self.addr.is_empty() {
            return Err(ArgsError::MissingAddr);
        }
        if !self.generic_commitment {
            return Err(ArgsError::GenericCommitmentRequired);
        }
        self.backend_settings().validate()?;
        Ok(())
    }

    /// `addr:port` to bind.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            sunrise: SunriseSettings {
                endpoint: self.sunrise.server.clone(),
                namespace: self.sunrise.namespace.clone(),
                data_shard_count: self.sunrise.data_shard_count,
                parity_shard_count: self.sunrise.parity_shard_count,
            },
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log.level.clone(),
            format: self.log.format,
            color: self.log.color,
        }
    }
}
