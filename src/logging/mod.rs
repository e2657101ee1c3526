use crate::models::{ProxyRequest, ProxyResponse};
use anyhow::Result;
use chrono::Utc;
use log::{debug, error, info, warn, LevelFilter};
use serde_json::json;
use std::sync::Once;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

/// Initialize the global logger.
///
/// The configured level acts as the default filter; RUST_LOG still takes
/// precedence when set. Safe to call more than once.
pub fn init_logger(level: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();

        // Bridge log events to tracing (after the subscriber is set up)
        if let Err(e) = LogTracer::init() {
            eprintln!("Warning: Failed to initialize LogTracer: {:?}", e);
        }

        log::set_max_level(level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info));
    });
}

/// Log one completed proxy transaction at debug level
pub fn log_transaction(request: &ProxyRequest, response: &ProxyResponse) -> Result<()> {
    let entry = json!({
        "timestamp": Utc::now().to_rfc3339(),
        "method": request.method,
        "url": request.url,
        "status": response.status,
        "response_bytes": response.body.len(),
        "cookies": response.cookies,
    });
    debug!("TRANSACTION: {}", serde_json::to_string(&entry)?);

    Ok(())
}

/// Log an error message
pub fn log_error(message: &str) {
    error!("{}", message);
}

/// Log an info message
pub fn log_info(message: &str) {
    info!("{}", message);
}

/// Log a warning message
pub fn log_warning(message: &str) {
    warn!("{}", message);
}

/// Log a debug message
pub fn log_debug(message: &str) {
    debug!("{}", message);
}

/// Convenience macro for logging errors
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_error(&format!($($arg)*));
    };
}

/// Convenience macro for logging info messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_info(&format!($($arg)*));
    };
}

/// Convenience macro for logging warning messages
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logging::log_warning(&format!($($arg)*));
    };
}

/// Convenience macro for logging debug messages
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_debug(&format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_log_transaction_serializes() {
        let request = ProxyRequest::new("GET", "https://proxy.example/a");
        let response = ProxyResponse {
            status: 200,
            headers: Default::default(),
            body: Bytes::from_static(b"ok"),
            cookies: Vec::new(),
            is_raw: false,
        };

        assert!(log_transaction(&request, &response).is_ok());
    }
}
