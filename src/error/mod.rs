//! Error handling module for the proxy translator

use thiserror::Error;

/// Custom error type for the proxy translator
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),

    #[error("HTTP request error: {0}")]
    HttpBuild(#[from] hyper::http::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the proxy translator
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for precondition failures raised before any network activity
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }
}
