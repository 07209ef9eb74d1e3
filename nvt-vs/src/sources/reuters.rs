//! Reuters site-search adapter
//!
//! Scrapes the Reuters search page for article links. Single known source, so
//! every record carries the Reuters table score instead of a per-record
//! lookup.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use super::transport::Transport;
use super::NewsSource;
use crate::credibility::CredibilityTable;
use crate::models::{CandidateArticle, FeedTag};

const SEARCH_ENDPOINT: &str = "https://www.reuters.com/search/news";
const SITE_ORIGIN: &str = "https://www.reuters.com";

fn build_search_url(query: &str) -> String {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("static base url parses");
    url.query_pairs_mut().append_pair("blob", query.trim());
    url.to_string()
}

fn parse_article_anchors(html: &str, credibility: u8, limit: usize) -> Vec<CandidateArticle> {
    let document = Html::parse_document(html);
    let Ok(anchor_sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for anchor in document.select(&anchor_sel) {
        if results.len() >= limit {
            break;
        }
        let href = anchor.value().attr("href").unwrap_or("").trim();
        if !href.contains("/article/") {
            continue;
        }
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let url = if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", SITE_ORIGIN, href)
        };

        results.push(CandidateArticle {
            title,
            source: "Reuters".to_string(),
            url,
            published_at: String::new(),
            credibility,
            feed: FeedTag::Reuters,
        });
    }

    results
}

/// Reuters scrape adapter
pub struct ReutersSource {
    transport: Arc<Transport>,
    credibility: u8,
    max_results: usize,
}

impl ReutersSource {
    pub fn new(
        transport: Arc<Transport>,
        credibility_table: &CredibilityTable,
        max_results: usize,
    ) -> Self {
        Self {
            transport,
            credibility: credibility_table.score("reuters.com"),
            max_results,
        }
    }
}

#[async_trait]
impl NewsSource for ReutersSource {
    fn name(&self) -> &'static str {
        "Reuters"
    }

    async fn fetch(&self, query: &str) -> Vec<CandidateArticle> {
        let url = build_search_url(query);

        let html = match self.transport.get_text(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(source = self.name(), error = %e, "Fetch failed");
                return Vec::new();
            }
        };

        let results = parse_article_anchors(&html, self.credibility, self.max_results);
        debug!(source = self.name(), count = results.len(), "Fetched articles");
        results
    }
}
