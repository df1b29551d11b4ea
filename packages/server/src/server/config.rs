//! Environment-driven server configuration.

use anyhow::{Context, Result};

use crate::kernel::DEFAULT_DASHBOARD_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dashboard_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `PORT` (default 8080)
    /// - `DASHBOARD_BASE_URL` (default [`DEFAULT_DASHBOARD_BASE_URL`])
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            Err(_) => 8080,
        };

        let dashboard_base_url = std::env::var("DASHBOARD_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_DASHBOARD_BASE_URL.to_string());

        Ok(Self {
            port,
            dashboard_base_url,
        })
    }
}
