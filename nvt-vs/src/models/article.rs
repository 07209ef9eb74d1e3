//! Candidate article records produced by source adapters

use serde::{Deserialize, Serialize};

/// Tag identifying which adapter produced a candidate article.
///
/// Serialized as the adapter display name (`api_source` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedTag {
    #[serde(rename = "NewsAPI")]
    NewsApi,
    #[serde(rename = "Google News")]
    GoogleNews,
    #[serde(rename = "Reuters")]
    Reuters,
    #[serde(rename = "Top Stories")]
    TopStories,
}

impl FeedTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedTag::NewsApi => "NewsAPI",
            FeedTag::GoogleNews => "Google News",
            FeedTag::Reuters => "Reuters",
            FeedTag::TopStories => "Top Stories",
        }
    }
}

/// One article record returned by a single source adapter.
///
/// Constructed by an adapter with its credibility assigned at fetch time,
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateArticle {
    /// Article headline
    pub title: String,
    /// Source display name, "Unknown" when the feed omits it
    pub source: String,
    /// Article link, may be empty
    pub url: String,
    /// Publication timestamp as reported by the feed, free-form
    pub published_at: String,
    /// 0-100 trust score for the source
    pub credibility: u8,
    /// Producing adapter
    #[serde(rename = "api_source")]
    pub feed: FeedTag,
}
