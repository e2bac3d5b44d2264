//! Transport service - starts the HTTP transport for a gateway.

use tracing::info;

use super::HttpConfig;
use super::http::HttpTransport;
use crate::core::{Gateway, Result};

/// Transport service - manages the transport layer for the gateway.
pub struct TransportService {
    config: HttpConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Start serving the given gateway.
    ///
    /// This method blocks until the server shuts down.
    pub async fn run(self, gateway: Gateway) -> Result<()> {
        info!("Starting transport: HTTP on {}", self.config.address());
        HttpTransport::new(self.config).run(gateway).await?;
        Ok(())
    }
}
