//! Invocation glue: one translator call per received request
//!
//! This is the hosting layer the translator is consumed by. It accepts
//! inbound HTTP requests, invokes the translator exactly once per request
//! against the configured backend endpoint, and serializes the outward
//! response back to its own caller. Uncaught translator errors are mapped
//! to HTTP error responses here, never inside the translator.

use anyhow::Result;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

use crate::error::Error;
use crate::logging::log_transaction;
use crate::models::{ProxyRequest, ProxyResponse};
use crate::proxy::translator::ProxyTranslator;
use crate::utils::{build_error_response, headers_to_map, map_to_headers};

pub struct ProxyServer {
    listen_addr: SocketAddr,
    translator: Arc<ProxyTranslator>,
    backend_url: Url,
}

impl ProxyServer {
    /// Create a server forwarding every inbound request to one backend
    pub fn new(listen_addr: SocketAddr, translator: Arc<ProxyTranslator>, backend_url: Url) -> Self {
        Self {
            listen_addr,
            translator,
            backend_url,
        }
    }

    /// Start the proxy server
    pub async fn start(self) -> Result<()> {
        info!("Proxy server starting on {}", self.listen_addr);
        info!("Forwarding to backend {}", self.backend_url);

        let translator = Arc::clone(&self.translator);
        let backend_url = self.backend_url.clone();
        let make_svc = make_service_fn(move |conn: &hyper::server::conn::AddrStream| {
            let remote_addr = conn.remote_addr();
            let translator = Arc::clone(&translator);
            let backend_url = backend_url.clone();
            debug!("New connection from: {}", remote_addr);

            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let translator = Arc::clone(&translator);
                    let backend_url = backend_url.clone();
                    async move { handle_request(req, translator, backend_url).await }
                }))
            }
        });

        Server::bind(&self.listen_addr).serve(make_svc).await?;
        Ok(())
    }
}

/// Handle one inbound request: convert, translate, serialize back
async fn handle_request(
    req: Request<Body>,
    translator: Arc<ProxyTranslator>,
    backend_url: Url,
) -> std::result::Result<Response<Body>, Infallible> {
    let inbound = match read_inbound(req).await {
        Ok(inbound) => inbound,
        Err(e) => {
            error!("Failed to read inbound request: {}", e);
            return Ok(build_error_response(StatusCode::BAD_REQUEST, "Bad Request"));
        }
    };

    match translator.translate(&inbound, &backend_url).await {
        Ok(response) => {
            if let Err(e) = log_transaction(&inbound, &response) {
                eprintln!("Failed to log transaction: {}", e);
            }
            Ok(into_hyper_response(response))
        }
        Err(e @ Error::InvalidParameter(_)) => {
            error!("Rejected inbound request: {}", e);
            Ok(build_error_response(StatusCode::BAD_REQUEST, &e.to_string()))
        }
        Err(e) => {
            error!("Upstream request failed: {}", e);
            Ok(build_error_response(
                StatusCode::BAD_GATEWAY,
                &format!("Proxy Error: {}", e),
            ))
        }
    }
}

/// Convert a hyper request into the translator's inbound representation
async fn read_inbound(req: Request<Body>) -> crate::error::Result<ProxyRequest> {
    let (parts, body) = req.into_parts();
    let headers = headers_to_map(&parts.headers);

    // Reconstruct an absolute URL so the translator can name this hop
    let url = if parts.uri.scheme().is_some() {
        parts.uri.to_string()
    } else {
        match headers.get("host") {
            Some(host) => format!("http://{}{}", host, parts.uri),
            None => parts.uri.to_string(),
        }
    };

    let body = hyper::body::to_bytes(body).await?;

    Ok(ProxyRequest {
        method: parts.method.to_string(),
        url,
        headers,
        body,
    })
}

/// Serialize the outward response back onto the wire
fn into_hyper_response(response: ProxyResponse) -> Response<Body> {
    let mut builder = Response::builder().status(response.status);
    if let Some(headers) = builder.headers_mut() {
        *headers = map_to_headers(&response.headers);
    }

    builder.body(Body::from(response.body)).unwrap_or_else(|e| {
        error!("Failed to serialize response: {}", e);
        build_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Headers, RawResponse};
    use crate::proxy::transport::HttpTransport;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct CannedTransport {
        status: u16,
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn send(
            &self,
            _method: &str,
            _url: &str,
            _body: Bytes,
            _headers: &Headers,
        ) -> crate::error::Result<RawResponse> {
            Ok(RawResponse {
                status: self.status,
                headers: Headers::new(),
                body: Body::from("upstream"),
            })
        }

        fn transport_name(&self) -> &'static str {
            "canned"
        }
    }

    struct RefusingTransport;

    #[async_trait]
    impl HttpTransport for RefusingTransport {
        async fn send(
            &self,
            _method: &str,
            _url: &str,
            _body: Bytes,
            _headers: &Headers,
        ) -> crate::error::Result<RawResponse> {
            Err(Error::Config("connection refused".to_string()))
        }

        fn transport_name(&self) -> &'static str {
            "refusing"
        }
    }

    #[tokio::test]
    async fn test_read_inbound_reconstructs_absolute_url() {
        let req = Request::builder()
            .method("POST")
            .uri("/v1/keys/foo?api-version=2020")
            .header("Host", "proxy.example")
            .body(Body::from("payload"))
            .unwrap();

        let inbound = read_inbound(req).await.unwrap();

        assert_eq!(inbound.method, "POST");
        assert_eq!(inbound.url, "http://proxy.example/v1/keys/foo?api-version=2020");
        assert_eq!(inbound.headers.get("host"), Some("proxy.example"));
        assert_eq!(inbound.body, Bytes::from_static(b"payload"));
    }

    #[tokio::test]
    async fn test_handle_request_passes_backend_response_through() {
        let translator = Arc::new(ProxyTranslator::new(Arc::new(CannedTransport {
            status: 404,
        })));
        let backend_url = Url::parse("https://backend.example").unwrap();

        let req = Request::builder()
            .method("GET")
            .uri("/missing")
            .header("Host", "proxy.example")
            .body(Body::empty())
            .unwrap();

        let response = handle_request(req, translator, backend_url).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, Bytes::from_static(b"upstream"));
    }

    #[tokio::test]
    async fn test_handle_request_maps_invalid_parameter_to_400() {
        let translator = Arc::new(ProxyTranslator::new(Arc::new(CannedTransport {
            status: 200,
        })));
        // A cannot-be-a-base endpoint has no host to forward to
        let backend_url = Url::parse("mailto:user@example.com").unwrap();

        let req = Request::builder()
            .method("GET")
            .uri("/a")
            .header("Host", "proxy.example")
            .body(Body::empty())
            .unwrap();

        let response = handle_request(req, translator, backend_url).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_request_maps_transport_failure_to_502() {
        let translator = Arc::new(ProxyTranslator::new(Arc::new(RefusingTransport)));
        let backend_url = Url::parse("https://backend.example").unwrap();

        let req = Request::builder()
            .method("GET")
            .uri("/a")
            .header("Host", "proxy.example")
            .body(Body::empty())
            .unwrap();

        let response = handle_request(req, translator, backend_url).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_into_hyper_response_serializes_status_headers_and_body() {
        let mut headers = Headers::new();
        headers.insert("content-type", "text/plain");

        let response = into_hyper_response(ProxyResponse {
            status: 201,
            headers,
            body: Bytes::from_static(b"created"),
            cookies: Vec::new(),
            is_raw: false,
        });

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain"
        );
    }
}
