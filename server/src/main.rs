mod config;
mod error;
mod routes;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is the normal production case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), compression = config.compression, "practice site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
