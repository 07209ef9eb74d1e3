//! nvt-vs - News Verification Service
//!
//! Accepts a piece of news text and produces a verifiability verdict by
//! querying several independent news sources, deduplicating the results, and
//! combining source credibility, cross-source agreement, fact-check
//! heuristics, and content-quality heuristics into a weighted score.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nvt_vs::config::ServiceConfig;
use nvt_vs::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting nvt-vs (News Verification Service)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration (ENV over TOML over defaults)
    let config = ServiceConfig::resolve();
    let port = config.service.port;

    if config.service.news_api_key.is_none() {
        info!("No NewsAPI key configured, the NewsAPI adapter is disabled");
    }
    if config.service.classifier_url.is_none() {
        info!("No classifier sidecar configured, ML results will be omitted");
    }

    // Shared state: transport, credibility table, pipeline, classifier
    let state = AppState::new(&config)?;

    // Build router
    let app = nvt_vs::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
