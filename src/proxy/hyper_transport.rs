//! Hyper-based outbound transport with connection pooling
//!
//! A shared, reusable client avoids re-establishing connections for every
//! forwarded request. The HTTPS connector handles both schemes, so a single
//! pooled client serves all outbound traffic.

use async_trait::async_trait;
use bytes::Bytes;
use hyper::{Body, Client, Request};
use hyper_rustls::HttpsConnectorBuilder;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::HttpClientConfig;
use crate::error::Result;
use crate::models::{Headers, RawResponse};
use crate::proxy::transport::HttpTransport;
use crate::utils::headers_to_map;

/// Pooled hyper client for outbound requests
pub struct HyperTransport {
    client: Arc<Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>, Body>>,
}

impl HyperTransport {
    /// Create a transport with default client configuration
    pub fn new() -> Self {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Create a transport with custom client configuration
    pub fn with_config(config: &HttpClientConfig) -> Self {
        let mut http_connector = hyper::client::HttpConnector::new();
        http_connector.set_connect_timeout(Some(Duration::from_secs(config.connect_timeout_secs)));
        http_connector.set_nodelay(true);
        // The HTTPS connector decides the scheme, not the inner connector
        http_connector.enforce_http(false);

        let https_connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(http_connector);

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host as usize)
            .build(https_connector);

        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Bytes,
        headers: &Headers,
    ) -> Result<RawResponse> {
        let mut builder = Request::builder().method(method).uri(url);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        let request = builder.body(Body::from(body))?;

        debug!("Dispatching {} {} via hyper", method, url);
        let response = self.client.request(request).await?;

        let (parts, body) = response.into_parts();
        Ok(RawResponse {
            status: parts.status.as_u16(),
            headers: headers_to_map(&parts.headers),
            body,
        })
    }

    fn transport_name(&self) -> &'static str {
        "hyper"
    }
}
