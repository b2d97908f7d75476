//! # Adapters Layer
//!
//! Concrete [`DaStore`](crate::ports::DaStore) backends.

pub mod api;
mod sunrise;

pub use sunrise::{SunriseStore, DEFAULT_GET_TIMEOUT};
