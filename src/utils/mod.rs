//! Utility functions for the proxy translator

pub mod http;
pub mod url;

pub use http::*;
pub use url::*;
