//! Response translation
//!
//! Converts a raw backend response into the outward response shape the
//! proxy's caller expects, including parsing the cookie header into
//! discrete records.

use crate::error::Result;
use crate::models::{ProxyResponse, RawResponse};
use crate::utils::parse_cookie_header;

impl ProxyResponse {
    /// Build an outward response from a raw backend response.
    ///
    /// Reads the body fully into memory; status and headers are copied
    /// verbatim. An absent cookie header yields an empty cookie list, not
    /// an error. Body-read failures propagate unmodified.
    pub async fn from_raw(raw: RawResponse) -> Result<Self> {
        let body = hyper::body::to_bytes(raw.body).await?;

        let cookies = match raw.headers.get("cookie") {
            Some(cookie_header) => parse_cookie_header(cookie_header),
            None => Vec::new(),
        };

        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            body,
            cookies,
            is_raw: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Headers;
    use bytes::Bytes;
    use hyper::Body;

    fn raw_response(status: u16, headers: Headers, body: &'static str) -> RawResponse {
        RawResponse {
            status,
            headers,
            body: Body::from(body),
        }
    }

    #[tokio::test]
    async fn test_from_raw_copies_status_headers_and_body() {
        let mut headers = Headers::new();
        headers.insert("content-type", "application/json");

        let response = ProxyResponse::from_raw(raw_response(201, headers, "{\"id\":1}"))
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.headers.get("content-type"), Some("application/json"));
        assert_eq!(response.body, Bytes::from_static(b"{\"id\":1}"));
        assert!(!response.is_raw);
    }

    #[tokio::test]
    async fn test_from_raw_parses_cookie_header_in_order() {
        let mut headers = Headers::new();
        headers.insert("cookie", "a=1; b=2");

        let response = ProxyResponse::from_raw(raw_response(200, headers, ""))
            .await
            .unwrap();

        assert_eq!(response.cookies.len(), 2);
        assert_eq!(response.cookies[0].name, "a");
        assert_eq!(response.cookies[0].value.as_deref(), Some("1"));
        assert_eq!(response.cookies[1].name, "b");
        assert_eq!(response.cookies[1].value.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_from_raw_without_cookie_header_yields_empty_list() {
        let response = ProxyResponse::from_raw(raw_response(200, Headers::new(), "ok"))
            .await
            .unwrap();

        assert!(response.cookies.is_empty());
    }

    #[tokio::test]
    async fn test_from_raw_tolerates_malformed_cookie_pair() {
        let mut headers = Headers::new();
        headers.insert("cookie", "malformed");

        let response = ProxyResponse::from_raw(raw_response(200, headers, ""))
            .await
            .unwrap();

        assert_eq!(response.cookies.len(), 1);
        assert_eq!(response.cookies[0].name, "malformed");
        assert_eq!(response.cookies[0].value, None);
    }
}
