// Site server entry point
//
// Usage: cargo run --bin site_server
// Browser controller: wasm-pack build --target web --no-default-features --features wasm

use marching_fest::config::{ServerConfig, DEFAULT_LOG_FILTER};
use marching_fest::{create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  EVALUATION_FORM_URL: {}", config.evaluation_form_url);
    tracing::info!("  PKG_DIR: {}", config.pkg_dir.display());

    if !config.pkg_dir.is_dir() {
        tracing::warn!(
            "{} not found; the page will render without scroll tracking",
            config.pkg_dir.display()
        );
    }

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
