//! Reqwest-based outbound transport

use async_trait::async_trait;
use bytes::Bytes;
use hyper::Body;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::HttpClientConfig;
use crate::error::Result;
use crate::models::{Headers, RawResponse};
use crate::proxy::transport::HttpTransport;
use crate::utils::{headers_to_map, map_to_headers};

/// Reqwest client for outbound requests
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with custom client configuration
    pub fn with_config(config: &HttpClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host as usize)
            .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Bytes,
        headers: &Headers,
    ) -> Result<RawResponse> {
        let method = method
            .parse::<reqwest::Method>()
            .map_err(hyper::http::Error::from)?;

        debug!("Dispatching {} {} via reqwest", method, url);
        let response = self
            .client
            .request(method, url)
            .headers(map_to_headers(headers))
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let raw_headers = headers_to_map(response.headers());
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers: raw_headers,
            body: Body::from(body),
        })
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}
