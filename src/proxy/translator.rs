//! Proxy request translation
//!
//! Turns an inbound request addressed to the proxy into an outbound request
//! addressed to the backend endpoint: only the authority changes, the
//! resource path and query are preserved, and the `host`/`via` headers are
//! rewritten to describe the new hop.

use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::models::{ProxyRequest, ProxyResponse};
use crate::proxy::transport::HttpTransport;
use crate::utils::{append_via_hop, host_of, host_with_port, origin_of, path_and_query};

/// Translates inbound requests and forwards them through an injected transport.
///
/// Stateless across calls: each invocation works on its own private copy of
/// the request, so concurrent calls against one translator are safe.
pub struct ProxyTranslator {
    transport: Arc<dyn HttpTransport>,
}

impl ProxyTranslator {
    /// Create a translator that dispatches through the given transport
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Translate an inbound request, forward it to the backend endpoint and
    /// return the translated backend response.
    ///
    /// Validation happens before any header mutation or network activity;
    /// a degenerate request (empty method or URL) or an endpoint without a
    /// host fails with `Error::InvalidParameter` and the transport is never
    /// invoked. Transport failures propagate unmodified. The caller's
    /// request is never mutated.
    pub async fn translate(
        &self,
        request: &ProxyRequest,
        endpoint: &Url,
    ) -> Result<ProxyResponse> {
        if request.method.is_empty() {
            return Err(Error::InvalidParameter("request.method"));
        }
        if request.url.is_empty() {
            return Err(Error::InvalidParameter("request.url"));
        }
        let endpoint_host =
            host_with_port(endpoint).ok_or(Error::InvalidParameter("endpoint"))?;

        // Private copy for the duration of this call
        let mut outbound = request.clone();

        // Re-address: the endpoint's authority with the original path and query
        let target_url = format!("{}{}", origin_of(endpoint), path_and_query(&outbound.url)?);

        // This hop's own name, for the Via header. The inbound URL names the
        // proxy; fall back to the Host header the caller sent.
        let proxy_host = host_of(&outbound.url)
            .or_else(|| outbound.headers.get("host").map(str::to_string))
            .unwrap_or_else(|| "proxy".to_string());

        // The backend virtual-hosts on the target authority, not the proxy's
        outbound.headers.insert("host", endpoint_host);

        // Record this hop, preserving any earlier ones
        let via = append_via_hop(outbound.headers.get("via"), &proxy_host);
        outbound.headers.insert("via", via);

        // x-forwarded-for is the invoking layer's responsibility

        debug!(
            "Forwarding {} {} -> {}",
            outbound.method, outbound.url, target_url
        );
        let raw = self
            .transport
            .send(
                &outbound.method,
                &target_url,
                outbound.body.clone(),
                &outbound.headers,
            )
            .await?;

        ProxyResponse::from_raw(raw).await
    }
}
