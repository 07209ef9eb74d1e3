//! Source adapters
//!
//! One adapter per external news feed, all behind the `NewsSource` trait.
//! Adapters are fail-soft: transport and parse failures are logged and yield
//! an empty list, never an error. New sources add an implementation without
//! touching the pipeline.

pub mod google_news;
pub mod newsapi;
pub mod reuters;
pub mod rss;
pub mod top_stories;
pub mod transport;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::models::CandidateArticle;

pub use google_news::GoogleNewsSource;
pub use newsapi::NewsApiSource;
pub use reuters::ReutersSource;
pub use top_stories::TopStoriesSource;
pub use transport::Transport;

/// A single external news feed.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Adapter display name for logs
    fn name(&self) -> &'static str;

    /// Fetch candidate articles for a query. Finite, never errors; failures
    /// degrade to an empty list inside the adapter.
    async fn fetch(&self, query: &str) -> Vec<CandidateArticle>;
}

/// Fetch from all sources concurrently.
///
/// Each adapter runs under its own timeout; the whole fan-out is additionally
/// bounded by `overall_deadline`. Results are flattened in adapter order so
/// the downstream dedup pass stays reproducible. A slow or failed adapter
/// contributes nothing; whatever completed before the deadline is used.
pub async fn fetch_all(
    sources: &[Arc<dyn NewsSource>],
    query: &str,
    per_source_timeout: Duration,
    overall_deadline: Duration,
) -> Vec<CandidateArticle> {
    let slots: Arc<Mutex<Vec<Option<Vec<CandidateArticle>>>>> =
        Arc::new(Mutex::new(vec![None; sources.len()]));

    let mut handles = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        let source = Arc::clone(source);
        let slots = Arc::clone(&slots);
        let query = query.to_string();

        handles.push(tokio::spawn(async move {
            match tokio::time::timeout(per_source_timeout, source.fetch(&query)).await {
                Ok(articles) => {
                    slots.lock().await[index] = Some(articles);
                }
                Err(_) => {
                    warn!(source = source.name(), "Source fetch timed out");
                }
            }
        }));
    }

    let joined = tokio::time::timeout(overall_deadline, futures::future::join_all(handles)).await;
    if joined.is_err() {
        warn!("Overall fetch deadline elapsed, continuing with completed sources");
    }

    let mut slots = slots.lock().await;
    slots
        .iter_mut()
        .filter_map(|slot| slot.take())
        .flatten()
        .collect()
}
