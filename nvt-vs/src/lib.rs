//! nvt-vs library interface
//!
//! Exposes the application state, router construction, and the verification
//! pipeline for integration testing.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod credibility;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sources;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

use crate::classifier::ClassifierClient;
use crate::config::ServiceConfig;
use crate::credibility::CredibilityTable;
use crate::pipeline::VerificationPipeline;
use crate::sources::Transport;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound HTTP transport
    pub transport: Arc<Transport>,
    /// Verification pipeline
    pub pipeline: Arc<VerificationPipeline>,
    /// Optional classifier sidecar
    pub classifier: Option<Arc<ClassifierClient>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> nvt_common::Result<Self> {
        let transport = Arc::new(Transport::new(
            Duration::from_secs(config.search.timeout_secs),
            &config.service.user_agent,
            config.retry.max_retries,
            Duration::from_secs(config.retry.delay_secs),
        )?);

        let credibility = Arc::new(CredibilityTable::builtin());

        let pipeline = Arc::new(VerificationPipeline::new(
            config,
            Arc::clone(&transport),
            credibility,
        ));

        let classifier = config
            .service
            .classifier_url
            .clone()
            .map(|url| Arc::new(ClassifierClient::new(Arc::clone(&transport), url)));

        Ok(Self {
            transport,
            pipeline,
            classifier,
            startup_time: Utc::now(),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::verify_routes())
        .merge(api::live_news_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
