//! # Ports
//!
//! Traits the rest of the system depends on instead of concrete backends.

pub mod outbound;

pub use outbound::{DaStore, InMemoryDaStore};
