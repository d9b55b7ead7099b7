// Environment configuration

use anyhow::{Context, Result};

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub http_port: u16,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let http_port = std::env::var("HTTP_PORT")
            .context("HTTP_PORT environment variable required")?
            .parse()
            .context("HTTP_PORT must be a valid port number")?;

        Ok(Self { http_port })
    }
}
