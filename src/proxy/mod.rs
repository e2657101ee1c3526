//! Proxy translation module

pub mod hyper_transport;
pub mod reqwest_transport;
pub mod response;
pub mod server;
pub mod translator;
pub mod transport;

// Re-exports
pub use hyper_transport::HyperTransport;
pub use reqwest_transport::ReqwestTransport;
pub use server::ProxyServer;
pub use translator::ProxyTranslator;
pub use transport::{HttpTransport, TransportFactory, TransportKind};
