//! Verification report payload returned by the verify endpoints

use serde::Serialize;
use uuid::Uuid;

use crate::analysis::consistency::ConsistencyAnalysis;
use crate::analysis::content_quality::ContentAnalysis;
use crate::models::{CandidateArticle, Verdict};

/// Per-request analysis summary
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Mean credibility over the unique result set, one decimal
    pub source_credibility: f64,
    pub cross_source_consistency: ConsistencyAnalysis,
    pub fact_checking_score: u32,
    pub content_quality: u32,
    pub source_count: usize,
}

/// Full verification result for one claim.
///
/// Field names are the contract surface consumed by callers.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub success: bool,
    pub request_id: Uuid,
    pub verdict: Verdict,
    pub analysis: AnalysisSummary,
    /// Up to 5 candidate articles, credibility-sorted
    pub top_sources: Vec<CandidateArticle>,
    pub content_analysis: ContentAnalysis,
}
