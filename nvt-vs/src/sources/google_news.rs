//! Google News search adapter
//!
//! Queries the Google News search RSS feed. The endpoint is query
//! parameterized, so no local relevance filtering is needed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use super::rss;
use super::transport::Transport;
use super::NewsSource;
use crate::credibility::CredibilityTable;
use crate::models::{CandidateArticle, FeedTag};

const SEARCH_FEED: &str = "https://news.google.com/rss/search";

fn build_search_url(query: &str) -> String {
    let mut url = Url::parse(SEARCH_FEED).expect("static base url parses");
    url.query_pairs_mut()
        .append_pair("q", query.trim())
        .append_pair("hl", "en-US")
        .append_pair("gl", "US")
        .append_pair("ceid", "US:en");
    url.to_string()
}

/// Google News RSS source adapter
pub struct GoogleNewsSource {
    transport: Arc<Transport>,
    credibility: Arc<CredibilityTable>,
    max_results: usize,
}

impl GoogleNewsSource {
    pub fn new(
        transport: Arc<Transport>,
        credibility: Arc<CredibilityTable>,
        max_results: usize,
    ) -> Self {
        Self {
            transport,
            credibility,
            max_results,
        }
    }
}

#[async_trait]
impl NewsSource for GoogleNewsSource {
    fn name(&self) -> &'static str {
        "Google News"
    }

    async fn fetch(&self, query: &str) -> Vec<CandidateArticle> {
        let url = build_search_url(query);

        let rss_xml = match self.transport.get_text(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(source = self.name(), error = %e, "Fetch failed");
                return Vec::new();
            }
        };

        let results: Vec<CandidateArticle> = rss::parse_items(&rss_xml, self.max_results)
            .into_iter()
            .filter_map(|item| {
                // Feed items without a title are skipped, not fatal
                let title = item.title?;
                let source_name = item.source.unwrap_or_else(|| "Unknown".to_string());
                let credibility = self.credibility.score(&source_name);

                Some(CandidateArticle {
                    title,
                    source: source_name,
                    url: item.link.unwrap_or_default(),
                    published_at: item.pub_date.unwrap_or_default(),
                    credibility,
                    feed: FeedTag::GoogleNews,
                })
            })
            .collect();

        debug!(source = self.name(), count = results.len(), "Fetched articles");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_is_query_parameterized() {
        let url = build_search_url("election results");
        assert!(url.starts_with("https://news.google.com/rss/search?"));
        assert!(url.contains("q=election+results"));
        assert!(url.contains("ceid=US%3Aen"));
    }
}
