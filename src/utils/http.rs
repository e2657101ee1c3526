//! HTTP utility functions

use crate::models::{Cookie, Headers};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Body, HeaderMap, Response, StatusCode};

/// Convert a hyper HeaderMap to the case-insensitive Headers map
pub fn headers_to_map(headers: &HeaderMap) -> Headers {
    let mut map = Headers::new();

    for (name, value) in headers {
        if let Ok(value_str) = value.to_str() {
            map.insert(name.as_str(), value_str);
        }
    }

    map
}

/// Convert Headers back to a hyper HeaderMap
pub fn map_to_headers(map: &Headers) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (name, value) in map.iter() {
        if let (Ok(name), Ok(value)) = (name.parse::<HeaderName>(), value.parse::<HeaderValue>()) {
            headers.insert(name, value);
        }
    }

    headers
}

/// Append a proxy hop to a Via header value, preserving earlier hops
pub fn append_via_hop(existing: Option<&str>, proxy_host: &str) -> String {
    let hop = format!("1.1 {}", proxy_host);
    match existing {
        Some(prior) if !prior.trim().is_empty() => format!("{}, {}", prior, hop),
        _ => hop,
    }
}

/// Parse a cookie header into discrete cookie records, preserving order.
///
/// Pairs are separated by `;` and split on the first `=`. Parsing is
/// best-effort per pair: a pair without a separator still yields a record,
/// with no value.
pub fn parse_cookie_header(cookie_header: &str) -> Vec<Cookie> {
    let mut cookies = Vec::new();

    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        match pair.find('=') {
            Some(eq_pos) => cookies.push(Cookie {
                name: pair[..eq_pos].trim().to_string(),
                value: Some(pair[eq_pos + 1..].trim().to_string()),
            }),
            None => cookies.push(Cookie {
                name: pair.to_string(),
                value: None,
            }),
        }
    }

    cookies
}

/// Build error response
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .body(Body::from(message.to_string()))
        .unwrap()
}
