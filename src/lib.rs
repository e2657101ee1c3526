//! Rust Transparent Proxy - a transparent forwarding-proxy translator
//!
//! Accepts inbound HTTP requests, re-addresses them to a configured backend
//! following standard proxy-forwarding conventions (`Host` and `Via` header
//! rewriting, path and query preserved, body passed through) and translates
//! the backend's raw response back into the shape the caller expects.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod proxy;
pub mod utils;

// Re-export commonly used items
pub use config::settings::{HttpClientConfig, ProxyConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, log_debug, log_error, log_info, log_warning};
pub use models::{Cookie, Headers, ProxyRequest, ProxyResponse, RawResponse};
pub use proxy::server::ProxyServer;
pub use proxy::translator::ProxyTranslator;
pub use proxy::transport::{HttpTransport, TransportFactory, TransportKind};
