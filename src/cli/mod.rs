//! Command-line interface for the proxy translator

use crate::config::settings::ProxyConfig;
use crate::error::{Error, Result};
use clap::Parser;

/// Transparent forwarding proxy for a single configured backend
#[derive(Debug, Parser)]
#[command(name = "rust-transparent-proxy", version)]
pub struct Cli {
    /// Proxy listening address
    #[arg(long)]
    pub listen_addr: Option<String>,

    /// Backend endpoint URL (overrides PROXY_BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Outbound transport implementation: hyper or reqwest
    #[arg(long)]
    pub transport: Option<String>,

    /// Log level
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply CLI overrides on top of environment configuration
    pub fn apply_to(&self, config: &mut ProxyConfig) -> Result<()> {
        if let Some(listen_addr) = &self.listen_addr {
            config.listen_addr = listen_addr.parse().map_err(|e| {
                Error::Config(format!("Invalid listen address '{}': {}", listen_addr, e))
            })?;
        }
        if let Some(backend_url) = &self.backend_url {
            config.backend_url = backend_url.clone();
        }
        if let Some(transport) = &self.transport {
            config.transport = transport.clone();
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }

        Ok(())
    }
}
