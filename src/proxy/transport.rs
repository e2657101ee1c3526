//! Transport abstractions for pluggable outbound HTTP implementations
//!
//! The translator never talks to the network directly; it dispatches through
//! an injected `HttpTransport`, so implementations (hyper, reqwest, test
//! doubles) can be swapped without touching the translation logic.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::config::settings::HttpClientConfig;
use crate::error::{Error, Result};
use crate::models::{Headers, RawResponse};

/// Outbound HTTP transport collaborator.
///
/// One call to `send` issues exactly one outbound request. Network and
/// protocol failures surface as errors from `send`; no retry or suppression
/// logic lives behind this trait. Cancellation and timeout policy belong to
/// the implementation, not to its callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue an outbound request and return the raw response, body unread
    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Bytes,
        headers: &Headers,
    ) -> Result<RawResponse>;

    /// Get the implementation name
    fn transport_name(&self) -> &'static str;
}

/// Available transport implementations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Hyper-based client with connection pooling
    Hyper,
    /// Reqwest-based client (high-level HTTP client)
    Reqwest,
}

/// Factory for creating transport implementations
pub struct TransportFactory;

impl TransportFactory {
    /// Create a transport implementation with the given client configuration
    pub fn create_transport(
        kind: TransportKind,
        config: &HttpClientConfig,
    ) -> Result<Box<dyn HttpTransport>> {
        Ok(match kind {
            TransportKind::Hyper => {
                Box::new(crate::proxy::hyper_transport::HyperTransport::with_config(config))
            }
            TransportKind::Reqwest => {
                Box::new(crate::proxy::reqwest_transport::ReqwestTransport::with_config(config)?)
            }
        })
    }

    /// Create a transport from its string name
    pub fn create_transport_from_name(
        name: &str,
        config: &HttpClientConfig,
    ) -> Result<Box<dyn HttpTransport>> {
        let kind = match name.to_lowercase().as_str() {
            "hyper" => TransportKind::Hyper,
            "reqwest" => TransportKind::Reqwest,
            _ => {
                return Err(Error::Config(format!(
                    "Unknown transport implementation: {}",
                    name
                )))
            }
        };

        Self::create_transport(kind, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_factory() {
        let config = HttpClientConfig::default();

        let transport = TransportFactory::create_transport(TransportKind::Hyper, &config).unwrap();
        assert_eq!(transport.transport_name(), "hyper");

        let transport = TransportFactory::create_transport_from_name("Reqwest", &config).unwrap();
        assert_eq!(transport.transport_name(), "reqwest");
    }

    #[test]
    fn test_transport_factory_unknown_name() {
        let config = HttpClientConfig::default();
        let result = TransportFactory::create_transport_from_name("curl", &config);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
