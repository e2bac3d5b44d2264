//! Transport layer for the gateway.
//!
//! The gateway is served over HTTP with JSON bodies. `service.rs` wires the
//! configured transport to a [`Gateway`](crate::core::Gateway) and runs it.

mod config;
mod error;
pub mod http;
mod service;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
