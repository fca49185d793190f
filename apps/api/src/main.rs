use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvforge_api::config::Config;
use cvforge_api::engine::Engine;
use cvforge_api::layout::default_page_config;
use cvforge_api::routes::build_router;
use cvforge_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Forge API v{}", env!("CARGO_PKG_VERSION"));

    // Build the document engine; any template or label defect stops startup here
    let page_config = default_page_config(config.page_size);
    let engine = Engine::builtin(page_config)?;
    engine
        .templates()
        .get_template(&config.default_template)
        .context("DEFAULT_TEMPLATE must name a registered template")?;
    info!(
        "Defaults: template '{}', language '{}'",
        config.default_template, config.default_language
    );

    let state = AppState {
        config: config.clone(),
        engine: Arc::new(engine),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
