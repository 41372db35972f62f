use std::sync::Arc;

use clipx::config::Config;
use clipx::{AppState, build_app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    info!(clip_server = %config.clip_server_url, "starting ClipX");

    let state = Arc::new(AppState::new(config));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
