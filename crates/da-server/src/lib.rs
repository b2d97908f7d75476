//! # DA Server
//!
//! Process shell for the Sunrise alt-DA store: command line, logging setup and
//! the HTTP server that rollup nodes talk to.
//!
//! ## Module Structure
//!
//! ```text
//! da-server/
//! ├── cli.rs        # Flags and env vars
//! ├── telemetry.rs  # tracing-subscriber setup
//! ├── server.rs     # axum routes and start/stop
//! └── error.rs      # ServerError, ArgsError, TelemetryError
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod server;
pub mod telemetry;

pub use cli::Args;
pub use error::{ArgsError, ServerError, TelemetryError};
pub use server::DaServer;
pub use telemetry::{init_logging, LogConfig, LogFormat};
