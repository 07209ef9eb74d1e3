//! Live news endpoint
//!
//! GET /live-news fetches the fixed top-stories feed and annotates each
//! headline with an optional classifier prediction.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::classifier::Prediction;
use crate::error::{ApiError, ApiResult};
use crate::sources::rss;
use crate::sources::top_stories::TOP_FEED;
use crate::AppState;

const LIVE_NEWS_LIMIT: usize = 10;

/// One live headline with its optional ML annotation
#[derive(Debug, Serialize)]
pub struct LiveNewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: String,
    pub ml_prediction: Option<Prediction>,
}

/// GET /live-news response
#[derive(Debug, Serialize)]
pub struct LiveNewsResponse {
    pub news: Vec<LiveNewsItem>,
}

/// GET /live-news
pub async fn live_news(State(state): State<AppState>) -> ApiResult<Json<LiveNewsResponse>> {
    let rss_xml = state
        .transport
        .get_text(TOP_FEED)
        .await
        .map_err(|e| ApiError::Internal(format!("Top stories fetch failed: {}", e)))?;

    let mut news = Vec::new();
    for item in rss::parse_items(&rss_xml, LIVE_NEWS_LIMIT) {
        let Some(title) = item.title else {
            continue;
        };

        let ml_prediction = match &state.classifier {
            Some(classifier) => classifier.predict_or_none(&title).await,
            None => None,
        };

        news.push(LiveNewsItem {
            title,
            source: item.source.unwrap_or_else(|| "Unknown".to_string()),
            url: item.link.unwrap_or_default(),
            published_at: item.pub_date.unwrap_or_default(),
            ml_prediction,
        });
    }

    Ok(Json(LiveNewsResponse { news }))
}

/// Build live news routes
pub fn live_news_routes() -> Router<AppState> {
    Router::new().route("/live-news", get(live_news))
}
