//! NewsAPI adapter
//!
//! Queries the NewsAPI `everything` endpoint. Requires an API key; the
//! pipeline only registers this adapter when one is configured.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::transport::Transport;
use super::NewsSource;
use crate::credibility::CredibilityTable;
use crate::models::{CandidateArticle, FeedTag};

const NEWSAPI_ENDPOINT: &str = "https://newsapi.org/v2/everything";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<NewsApiSourceRef>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSourceRef {
    name: Option<String>,
}

/// NewsAPI source adapter
pub struct NewsApiSource {
    transport: Arc<Transport>,
    credibility: Arc<CredibilityTable>,
    api_key: String,
    page_size: usize,
}

impl NewsApiSource {
    pub fn new(
        transport: Arc<Transport>,
        credibility: Arc<CredibilityTable>,
        api_key: String,
        page_size: usize,
    ) -> Self {
        Self {
            transport,
            credibility,
            api_key,
            page_size,
        }
    }

    fn build_url(&self, query: &str) -> String {
        let mut url = Url::parse(NEWSAPI_ENDPOINT).expect("static base url parses");
        url.query_pairs_mut()
            .append_pair("q", query.trim())
            .append_pair("apiKey", &self.api_key)
            .append_pair("language", "en")
            .append_pair("sortBy", "relevancy")
            .append_pair("pageSize", &self.page_size.to_string());
        url.to_string()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &'static str {
        "NewsAPI"
    }

    async fn fetch(&self, query: &str) -> Vec<CandidateArticle> {
        let url = self.build_url(query);

        let response: NewsApiResponse = match self.transport.get_json(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(source = self.name(), error = %e, "Fetch failed");
                return Vec::new();
            }
        };

        let mut results = Vec::new();
        for article in response.articles {
            // Records without a title are useless downstream
            let Some(title) = article.title.filter(|t| !t.trim().is_empty()) else {
                continue;
            };
            let source_name = article
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string());
            let credibility = self.credibility.score(&source_name);

            results.push(CandidateArticle {
                title,
                source: source_name,
                url: article.url.unwrap_or_default(),
                published_at: article.published_at.unwrap_or_default(),
                credibility,
                feed: FeedTag::NewsApi,
            });
        }

        debug!(source = self.name(), count = results.len(), "Fetched articles");
        results
    }
}
