use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Case-insensitive HTTP header map.
//
// Keys are normalized to lowercase on insert and lookup so header-name
// casing never varies across proxy hops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    map: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing value for the same name
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.map.insert(name.to_ascii_lowercase(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.remove(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            let name: String = name.into();
            headers.insert(&name, value);
        }
        headers
    }
}

// An inbound HTTP request as received from the proxy's caller.
//
// Caller-owned: the translator clones it on entry and never mutates the
// caller's instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyRequest {
    pub method: String,
    /// Absolute or relative URL carrying the requested path and query
    pub url: String,
    pub headers: Headers,
    pub body: Bytes,
}

impl ProxyRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }
}

// A raw backend response as returned by the transport, body unread.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: hyper::Body,
}

// The outward response handed back to the proxy's caller.
//
// Status and body are exactly the backend's; the translator never invents
// response content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
    /// Cookie records parsed from the backend's cookie header, in header order
    pub cookies: Vec<Cookie>,
    /// Tells the hosting layer to skip its own response formatting
    pub is_raw: bool,
}

/// A single cookie record parsed from a cookie header.
///
/// `value` is `None` when the pair carried no `=` separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: Option<String>,
}
