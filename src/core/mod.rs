//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the gateway itself and the HTTP transport
//! that serves it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::Gateway;
pub use transport::{HttpConfig, TransportService};
