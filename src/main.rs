mod config;
mod routes;

use std::net::SocketAddr;

/// Startup failures of the host binary.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "snipzo stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    let api = snipzo_client::config::ApiConfig::from_env();
    tracing::info!(%addr, api_base_url = api.base_url(), "snipzo listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
