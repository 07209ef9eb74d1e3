//! Verification pipeline
//!
//! Orchestrates one verification request: fan out to the source adapters (or
//! reuse memoized results), deduplicate, run the sub-analyses, and aggregate
//! into the final verdict. Nothing in here is fatal; the worst case for a
//! request is a well-formed UNVERIFIED report.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::{self, consistency, content_quality, fact_check, VerdictAggregator};
use crate::cache::QueryCache;
use crate::config::ServiceConfig;
use crate::credibility::CredibilityTable;
use crate::models::report::{AnalysisSummary, VerificationReport};
use crate::models::{CandidateArticle, Verdict};
use crate::sources::{
    self, GoogleNewsSource, NewsApiSource, NewsSource, ReutersSource, TopStoriesSource, Transport,
};

const TOP_SOURCES_LIMIT: usize = 5;

/// Multi-source verification pipeline
pub struct VerificationPipeline {
    sources: Vec<Arc<dyn NewsSource>>,
    cache: QueryCache<Vec<CandidateArticle>>,
    aggregator: VerdictAggregator,
    per_source_timeout: Duration,
    overall_deadline: Duration,
    min_title_len: usize,
    cache_enabled: bool,
    cache_max_age: Duration,
}

impl VerificationPipeline {
    /// Build the pipeline with the standard adapter set.
    ///
    /// Adapters run in a fixed order (NewsAPI, Google News, Reuters, Top
    /// Stories); NewsAPI is registered only when a key is configured.
    pub fn new(
        config: &ServiceConfig,
        transport: Arc<Transport>,
        credibility: Arc<CredibilityTable>,
    ) -> Self {
        let mut adapters: Vec<Arc<dyn NewsSource>> = Vec::new();

        if let Some(api_key) = config.service.news_api_key.clone() {
            adapters.push(Arc::new(NewsApiSource::new(
                Arc::clone(&transport),
                Arc::clone(&credibility),
                api_key,
                config.search.max_results_per_source,
            )));
        }
        adapters.push(Arc::new(GoogleNewsSource::new(
            Arc::clone(&transport),
            Arc::clone(&credibility),
            config.search.max_results_per_source,
        )));
        adapters.push(Arc::new(ReutersSource::new(
            Arc::clone(&transport),
            &credibility,
            config.search.max_results_per_source,
        )));
        adapters.push(Arc::new(TopStoriesSource::new(
            Arc::clone(&transport),
            Arc::clone(&credibility),
            config.search.top_stories_per_feed,
        )));

        Self::with_sources(config, adapters)
    }

    /// Build the pipeline over an explicit adapter list.
    pub fn with_sources(config: &ServiceConfig, sources: Vec<Arc<dyn NewsSource>>) -> Self {
        Self {
            sources,
            cache: QueryCache::new(config.cache.max_entries),
            aggregator: VerdictAggregator::new(config.verdict.weight_strategy),
            per_source_timeout: Duration::from_secs(config.search.timeout_secs),
            overall_deadline: Duration::from_secs(config.search.overall_deadline_secs),
            min_title_len: config.search.min_title_len,
            cache_enabled: config.cache.enabled,
            cache_max_age: Duration::from_secs(config.cache.ttl_secs),
        }
    }

    /// Fetch and deduplicate, reusing memoized results for identical queries.
    async fn unique_results(&self, query: &str) -> Vec<CandidateArticle> {
        if self.cache_enabled {
            if let Some(cached) = self.cache.get(query, self.cache_max_age).await {
                debug!(query, count = cached.len(), "Using memoized results");
                return cached;
            }
        }

        let candidates = sources::fetch_all(
            &self.sources,
            query,
            self.per_source_timeout,
            self.overall_deadline,
        )
        .await;
        let unique = analysis::dedupe(candidates, self.min_title_len);

        if self.cache_enabled {
            self.cache.put(query.to_string(), unique.clone()).await;
        }
        unique
    }

    /// Run the full verification for one claim.
    pub async fn verify(&self, text: &str) -> VerificationReport {
        let request_id = Uuid::new_v4();
        let unique = self.unique_results(text).await;

        let content_analysis = content_quality::analyze(text);
        let fact_analysis = fact_check::analyze(text);

        if unique.is_empty() {
            info!(%request_id, "No matching articles in any source");
            return VerificationReport {
                success: true,
                request_id,
                verdict: Verdict::unverified(),
                analysis: AnalysisSummary {
                    source_credibility: 0.0,
                    cross_source_consistency: consistency::ConsistencyAnalysis::none(),
                    fact_checking_score: fact_analysis.fact_score,
                    content_quality: content_analysis.quality_score,
                    source_count: 0,
                },
                top_sources: Vec::new(),
                content_analysis,
            };
        }

        let source_count = unique.len();
        let credibility_sum: u32 = unique.iter().map(|a| u32::from(a.credibility)).sum();
        let credibility_avg = f64::from(credibility_sum) / source_count as f64;

        let consistency_analysis = consistency::analyze(&unique);

        let verdict = self.aggregator.aggregate(
            credibility_avg,
            consistency_analysis.score,
            fact_analysis.fact_score,
            content_analysis.quality_score,
            source_count,
        );

        info!(
            %request_id,
            verdict = ?verdict.verdict,
            final_score = verdict.final_score,
            source_count,
            "Verification complete"
        );

        let top_sources: Vec<CandidateArticle> =
            unique.iter().take(TOP_SOURCES_LIMIT).cloned().collect();

        VerificationReport {
            success: true,
            request_id,
            verdict,
            analysis: AnalysisSummary {
                source_credibility: (credibility_avg * 10.0).round() / 10.0,
                cross_source_consistency: consistency_analysis,
                fact_checking_score: fact_analysis.fact_score,
                content_quality: content_analysis.quality_score,
                source_count,
            },
            top_sources,
            content_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedTag;
    use crate::models::VerdictLabel;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        articles: Vec<CandidateArticle>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(articles: Vec<CandidateArticle>) -> Arc<Self> {
            Arc::new(Self {
                articles,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl NewsSource for StubSource {
        fn name(&self) -> &'static str {
            "Stub"
        }

        async fn fetch(&self, _query: &str) -> Vec<CandidateArticle> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.articles.clone()
        }
    }

    fn article(title: &str, credibility: u8) -> CandidateArticle {
        CandidateArticle {
            title: title.to_string(),
            source: "Test Wire".to_string(),
            url: String::new(),
            published_at: String::new(),
            credibility,
            feed: FeedTag::GoogleNews,
        }
    }

    fn agreeing_articles(count: usize, credibility: u8) -> Vec<CandidateArticle> {
        (0..count)
            .map(|i| {
                article(
                    &format!("president announced policy {} according to officials 9 fifty percent approval", i),
                    credibility,
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_zero_sources_is_unverified() {
        let config = ServiceConfig::default();
        let sources: Vec<Arc<dyn NewsSource>> = vec![StubSource::new(Vec::new())];
        let pipeline = VerificationPipeline::with_sources(&config, sources);

        let report = pipeline
            .verify("SHOCKING: they don't want you to know this secret conspiracy, 100% guaranteed!")
            .await;

        assert!(report.success);
        assert_eq!(report.verdict.verdict, VerdictLabel::Unverified);
        assert_eq!(report.verdict.final_score, 0.0);
        assert_eq!(report.analysis.source_count, 0);
        assert_eq!(report.analysis.source_credibility, 0.0);
        assert_eq!(report.analysis.fact_checking_score, 0);
        assert_eq!(report.analysis.cross_source_consistency.score, 0);
        assert!(report.top_sources.is_empty());
    }

    #[tokio::test]
    async fn test_many_credible_agreeing_sources_verify_true() {
        let config = ServiceConfig::default();
        let sources: Vec<Arc<dyn NewsSource>> = vec![StubSource::new(agreeing_articles(6, 90))];
        let pipeline = VerificationPipeline::with_sources(&config, sources);

        let claim =
            "Biden announced a new policy on January 5 according to officials, 50% approval";
        let report = pipeline.verify(claim).await;

        assert_eq!(report.verdict.verdict, VerdictLabel::True);
        assert_eq!(report.analysis.source_count, 6);
        assert_eq!(report.analysis.source_credibility, 90.0);
        assert_eq!(report.analysis.cross_source_consistency.score, 90);
        assert_eq!(report.top_sources.len(), 5);
    }

    #[tokio::test]
    async fn test_identical_query_uses_memo() {
        let config = ServiceConfig::default();
        let source = StubSource::new(agreeing_articles(3, 80));
        let sources: Vec<Arc<dyn NewsSource>> = vec![Arc::clone(&source) as Arc<dyn NewsSource>];
        let pipeline = VerificationPipeline::with_sources(&config, sources);

        let _ = pipeline.verify("parliament vote on the treaty").await;
        let _ = pipeline.verify("parliament vote on the treaty").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let _ = pipeline.verify("a different query entirely").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_duplicate_titles_collapse_across_sources() {
        let config = ServiceConfig::default();
        let shared = article("identical headline from both feeds", 70);
        let sources: Vec<Arc<dyn NewsSource>> = vec![
            StubSource::new(vec![shared.clone()]),
            StubSource::new(vec![shared]),
        ];
        let pipeline = VerificationPipeline::with_sources(&config, sources);

        let report = pipeline.verify("identical headline").await;
        assert_eq!(report.analysis.source_count, 1);
    }
}
