mod config;
mod routes;

use config::{ConfigError, HostConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    let config = HostConfig::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.listen_addr()?;
    let app = routes::app().map_err(HostError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "taskdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
