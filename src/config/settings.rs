//! Proxy translator configuration settings

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Main configuration for the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Server listening address
    pub listen_addr: SocketAddr,

    /// Log level configuration
    pub log_level: String,

    /// Backend endpoint every inbound request is forwarded to
    pub backend_url: String,

    /// Outbound transport implementation ("hyper" or "reqwest")
    pub transport: String,

    /// HTTP client configuration
    pub http_client: HttpClientConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: u32,

    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".parse().unwrap(),
            log_level: "info".to_string(),
            backend_url: String::new(),
            transport: "hyper".to_string(),
            http_client: HttpClientConfig::default(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 50,
            idle_timeout_secs: 90,
            connect_timeout_secs: 10,
        }
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// All settings are optional here; the required backend endpoint is
    /// enforced when it is resolved via `backend_url()`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(backend_url) = std::env::var("PROXY_BACKEND_URL") {
            config.backend_url = backend_url;
        }
        if let Ok(listen_addr) = std::env::var("PROXY_LISTEN_ADDR") {
            config.listen_addr = listen_addr.parse().map_err(|e| {
                Error::Config(format!("Invalid PROXY_LISTEN_ADDR '{}': {}", listen_addr, e))
            })?;
        }
        if let Ok(log_level) = std::env::var("PROXY_LOG_LEVEL") {
            config.log_level = log_level;
        }
        if let Ok(transport) = std::env::var("PROXY_TRANSPORT") {
            config.transport = transport;
        }
        if let Ok(value) = std::env::var("PROXY_MAX_IDLE_PER_HOST") {
            config.http_client.max_idle_per_host = value.parse().unwrap_or(50);
        }
        if let Ok(value) = std::env::var("PROXY_IDLE_TIMEOUT_SECS") {
            config.http_client.idle_timeout_secs = value.parse().unwrap_or(90);
        }
        if let Ok(value) = std::env::var("PROXY_CONNECT_TIMEOUT_SECS") {
            config.http_client.connect_timeout_secs = value.parse().unwrap_or(10);
        }

        Ok(config)
    }

    /// Resolve the configured backend endpoint as a parsed URL.
    ///
    /// Fails fatally when the setting is missing or does not name a host;
    /// a proxy with no backend cannot serve anything.
    pub fn backend_url(&self) -> Result<Url> {
        if self.backend_url.is_empty() {
            return Err(Error::Config(
                "The required setting PROXY_BACKEND_URL has not been set".to_string(),
            ));
        }

        let url = Url::parse(&self.backend_url)?;
        if url.host_str().is_none() {
            return Err(Error::Config(format!(
                "Backend URL '{}' has no host",
                self.backend_url
            )));
        }

        Ok(url)
    }
}
