use std::sync::Arc;

use anyhow::Context;
use chat_relay::{Config, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Refuse to serve anything without a credential.
    let config = Config::from_env().context("failed to load configuration")?;

    let index_page = config.index_page();
    info!(
        template_dir = %config.template_dir.display(),
        template_dir_exists = config.template_dir.exists(),
        index_exists = index_page.exists(),
        "resolved template folder"
    );
    if !index_page.exists() {
        warn!("{} is missing, GET / will return 404", index_page.display());
    }

    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router(&index_page)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(model = %config.model, "chat relay running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
