//! Consistency Analyzer
//!
//! Measures lexical overlap among the titles of independently fetched
//! articles. Agreement between sources is approximated by counting word runs
//! that recur across more than one title; no semantic comparison is made.
//!
//! # Banding
//! - >= 5 sources and >= 3 consistent phrases: score 90, `high`
//! - >= 3 sources and >= 2 consistent phrases: score 70, `medium`
//! - otherwise: score 50, `low`
//!
//! A single source cannot corroborate itself, so fewer than 2 results short-
//! circuits to `low`/30.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::CandidateArticle;

/// Maximal runs of lowercase words, extracted from lowercased titles
static PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+(?:\s+[a-z]+)*\b").expect("static regex compiles"));

const MIN_PHRASE_LEN: usize = 3;

/// Qualitative consistency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyLevel {
    High,
    Medium,
    Low,
    None,
}

/// Cross-source consistency result
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyAnalysis {
    pub consistency: ConsistencyLevel,
    pub score: u32,
    pub details: String,
}

impl ConsistencyAnalysis {
    /// Fixed result for the zero-source case.
    pub fn none() -> Self {
        Self {
            consistency: ConsistencyLevel::None,
            score: 0,
            details: "No sources found".to_string(),
        }
    }
}

/// Cross-reference titles across the unique result set.
pub fn analyze(results: &[CandidateArticle]) -> ConsistencyAnalysis {
    if results.len() < 2 {
        return ConsistencyAnalysis {
            consistency: ConsistencyLevel::Low,
            score: 30,
            details: "Only one source found".to_string(),
        };
    }

    let mut phrase_counts: HashMap<String, usize> = HashMap::new();
    for result in results {
        let title = result.title.to_lowercase();
        for phrase in PHRASE_RE.find_iter(&title) {
            let phrase = phrase.as_str();
            if phrase.chars().count() > MIN_PHRASE_LEN {
                *phrase_counts.entry(phrase.to_string()).or_insert(0) += 1;
            }
        }
    }

    let total_sources = results.len();
    let consistent_phrases = phrase_counts.values().filter(|&&count| count > 1).count();

    let (score, consistency) = if total_sources >= 5 && consistent_phrases >= 3 {
        (90, ConsistencyLevel::High)
    } else if total_sources >= 3 && consistent_phrases >= 2 {
        (70, ConsistencyLevel::Medium)
    } else {
        (50, ConsistencyLevel::Low)
    };

    ConsistencyAnalysis {
        consistency,
        score,
        details: format!(
            "{} key phrases consistent across {} sources",
            consistent_phrases, total_sources
        ),
    }
}
