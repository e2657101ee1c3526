//! Main entry point for the transparent proxy

use anyhow::Result;
use clap::Parser;
use rust_transparent_proxy::cli::Cli;
use rust_transparent_proxy::{
    init_logger, log_info, ProxyConfig, ProxyServer, ProxyTranslator, TransportFactory,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ProxyConfig::from_env()?;
    cli.apply_to(&mut config)?;

    init_logger(&config.log_level);

    let backend_url = config.backend_url()?;

    log_info!("Starting transparent proxy on {}", config.listen_addr);
    log_info!("Forwarding all requests to {}", backend_url);
    log_info!("Outbound transport: {}", config.transport);

    let transport =
        TransportFactory::create_transport_from_name(&config.transport, &config.http_client)?;
    let translator = Arc::new(ProxyTranslator::new(Arc::from(transport)));

    let server = ProxyServer::new(config.listen_addr, translator, backend_url);
    server.start().await
}
