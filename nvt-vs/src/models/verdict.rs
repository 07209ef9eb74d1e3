//! Terminal verdict types
//!
//! The explanation strings are a compatibility surface consumed by existing
//! clients and must not be reworded.

use serde::{Deserialize, Serialize};

/// TRUE band explanation
pub const EXPLANATION_TRUE: &str =
    "Multiple credible sources confirm this news with consistent information and verifiable details.";
/// LIKELY TRUE band explanation
pub const EXPLANATION_LIKELY_TRUE: &str =
    "Several sources support this news, but some details may need verification.";
/// UNCERTAIN band explanation
pub const EXPLANATION_UNCERTAIN: &str =
    "Mixed signals - some sources support this, but credibility or consistency is questionable.";
/// LIKELY FALSE band explanation
pub const EXPLANATION_LIKELY_FALSE: &str =
    "Multiple red flags suggest this news may be inaccurate or misleading.";
/// UNVERIFIED (zero sources) explanation
pub const EXPLANATION_UNVERIFIED: &str = "No matching news found in any source.";

/// Categorical verdict label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictLabel {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "LIKELY TRUE")]
    LikelyTrue,
    #[serde(rename = "UNCERTAIN")]
    Uncertain,
    #[serde(rename = "LIKELY FALSE")]
    LikelyFalse,
    #[serde(rename = "UNVERIFIED")]
    Unverified,
}

/// Confidence attached to a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Terminal output of the verification pipeline.
///
/// Computed once per request from the weighted combination; immutable.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub verdict: VerdictLabel,
    pub confidence: Confidence,
    /// Weighted score in [0,100], rounded to one decimal
    pub final_score: f64,
    pub explanation: &'static str,
}

impl Verdict {
    /// Fixed terminal verdict for the zero-source case.
    pub fn unverified() -> Self {
        Self {
            verdict: VerdictLabel::Unverified,
            confidence: Confidence::Low,
            final_score: 0.0,
            explanation: EXPLANATION_UNVERIFIED,
        }
    }
}
