//! Top-stories adapter
//!
//! Reads the fixed Google News top-stories feed and a small set of section
//! sub-feeds. None of them are query parameterized, so this adapter filters
//! locally: an item is emitted only when at least one query token appears in
//! its title. Adapters that hit a query-parameterized endpoint skip this
//! filter entirely.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::rss;
use super::transport::Transport;
use super::NewsSource;
use crate::credibility::CredibilityTable;
use crate::models::{CandidateArticle, FeedTag};

/// Fixed top-stories feed, also served raw by the live-news endpoint
pub const TOP_FEED: &str = "https://news.google.com/rss";
const SECTION_FEEDS: [&str; 4] = [
    "https://news.google.com/rss/headlines/section/topic/WORLD",
    "https://news.google.com/rss/headlines/section/topic/NATION",
    "https://news.google.com/rss/headlines/section/topic/BUSINESS",
    "https://news.google.com/rss/headlines/section/topic/TECHNOLOGY",
];

/// Case-insensitive token overlap between query and title.
fn title_matches_query(query: &str, title: &str) -> bool {
    let title = title.to_lowercase();
    query
        .to_lowercase()
        .split_whitespace()
        .any(|token| title.contains(token))
}

/// Fixed-feed source adapter with local query filtering
pub struct TopStoriesSource {
    transport: Arc<Transport>,
    credibility: Arc<CredibilityTable>,
    per_feed_cap: usize,
}

impl TopStoriesSource {
    pub fn new(
        transport: Arc<Transport>,
        credibility: Arc<CredibilityTable>,
        per_feed_cap: usize,
    ) -> Self {
        Self {
            transport,
            credibility,
            per_feed_cap,
        }
    }

    async fn fetch_feed(&self, feed_url: &str, query: &str) -> Vec<CandidateArticle> {
        let rss_xml = match self.transport.get_text(feed_url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(source = self.name(), feed = feed_url, error = %e, "Feed fetch failed");
                return Vec::new();
            }
        };

        rss::parse_items(&rss_xml, self.per_feed_cap)
            .into_iter()
            .filter_map(|item| {
                let title = item.title?;
                if !title_matches_query(query, &title) {
                    return None;
                }
                let source_name = item.source.unwrap_or_else(|| "Unknown".to_string());
                let credibility = self.credibility.score(&source_name);

                Some(CandidateArticle {
                    title,
                    source: source_name,
                    url: item.link.unwrap_or_default(),
                    published_at: item.pub_date.unwrap_or_default(),
                    credibility,
                    feed: FeedTag::TopStories,
                })
            })
            .collect()
    }
}

#[async_trait]
impl NewsSource for TopStoriesSource {
    fn name(&self) -> &'static str {
        "Top Stories"
    }

    async fn fetch(&self, query: &str) -> Vec<CandidateArticle> {
        let mut results = Vec::new();

        results.extend(self.fetch_feed(TOP_FEED, query).await);
        for feed_url in SECTION_FEEDS {
            results.extend(self.fetch_feed(feed_url, query).await);
        }

        debug!(source = self.name(), count = results.len(), "Fetched articles");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_matches_any_query_token() {
        assert!(title_matches_query(
            "senate budget vote",
            "Budget talks stall in committee"
        ));
        assert!(!title_matches_query(
            "senate budget vote",
            "Storm warnings for the coast"
        ));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(title_matches_query("BIDEN", "Biden signs executive order"));
    }
}
