//! URL utility functions

use crate::error::Result;
use url::Url;

/// Parse URL and extract components
pub fn parse_url(url_str: &str) -> Result<Url> {
    Ok(Url::parse(url_str)?)
}

/// Scheme, host and non-default port of a URL, as used for re-addressing
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Host with its port when non-default, as it belongs in a Host header
pub fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Path and query of an inbound URL string.
///
/// Relative URLs (no authority) already are path+query and are taken
/// verbatim; for absolute URLs the scheme and authority are discarded.
pub fn path_and_query(url_str: &str) -> Result<String> {
    if url_str.starts_with('/') {
        return Ok(url_str.to_string());
    }
    let url = Url::parse(url_str)?;
    Ok(match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    })
}

/// Host of an inbound URL string, when it has one
pub fn host_of(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}
