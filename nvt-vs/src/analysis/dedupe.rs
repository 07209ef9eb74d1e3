//! Candidate article deduplication
//!
//! Merges per-adapter candidate lists into the unique, credibility-ranked set
//! consumed by the downstream analyzers.

use std::collections::HashSet;

use tracing::debug;

use crate::models::CandidateArticle;

/// Deduplicate candidates and rank by credibility.
///
/// Candidates are visited in arrival order (adapters run in a fixed order, so
/// the pass is reproducible). A candidate is dropped when its trimmed,
/// lowercased title is empty, no longer than `min_title_len` characters, or
/// already seen. Survivors are sorted by credibility descending; the sort is
/// stable, so ties keep arrival order.
pub fn dedupe(candidates: Vec<CandidateArticle>, min_title_len: usize) -> Vec<CandidateArticle> {
    let total = candidates.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<CandidateArticle> = Vec::new();

    for article in candidates {
        let normalized = article.title.trim().to_lowercase();
        if normalized.chars().count() <= min_title_len {
            continue;
        }
        if !seen.insert(normalized) {
            continue;
        }
        unique.push(article);
    }

    unique.sort_by(|a, b| b.credibility.cmp(&a.credibility));

    debug!(total, unique = unique.len(), "Deduplicated candidate articles");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedTag;

    fn article(title: &str, credibility: u8, feed: FeedTag) -> CandidateArticle {
        CandidateArticle {
            title: title.to_string(),
            source: "Test".to_string(),
            url: String::new(),
            published_at: String::new(),
            credibility,
            feed,
        }
    }

    #[test]
    fn test_case_insensitive_title_dedup() {
        let unique = dedupe(
            vec![
                article("Senate passes spending bill", 80, FeedTag::NewsApi),
                article("SENATE PASSES SPENDING BILL", 98, FeedTag::GoogleNews),
                article("Senate passes spending bill ", 60, FeedTag::Reuters),
            ],
            10,
        );

        assert_eq!(unique.len(), 1);
        // First arrival wins, even against a higher-credibility duplicate
        assert_eq!(unique[0].credibility, 80);
    }

    #[test]
    fn test_short_and_empty_titles_dropped() {
        let unique = dedupe(
            vec![
                article("", 98, FeedTag::NewsApi),
                article("   ", 98, FeedTag::NewsApi),
                article("Ten chars!", 98, FeedTag::NewsApi),
                article("Exactly eleven!", 70, FeedTag::GoogleNews),
            ],
            10,
        );

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].title, "Exactly eleven!");
    }

    #[test]
    fn test_sorted_by_credibility_descending_stable() {
        let unique = dedupe(
            vec![
                article("Storm warnings issued for the coast", 70, FeedTag::NewsApi),
                article("Parliament adjourns for the summer", 98, FeedTag::GoogleNews),
                article("Markets close higher after rate cut", 70, FeedTag::Reuters),
            ],
            10,
        );

        let credibility: Vec<u8> = unique.iter().map(|a| a.credibility).collect();
        assert_eq!(credibility, vec![98, 70, 70]);
        // Stable: the two 70s keep arrival order
        assert_eq!(unique[1].feed, FeedTag::NewsApi);
        assert_eq!(unique[2].feed, FeedTag::Reuters);
    }

    #[test]
    fn test_no_duplicate_normalized_titles_in_output() {
        let titles = [
            "Breaking update on the summit",
            "breaking update on the summit",
            "A different headline entirely",
        ];
        let candidates = titles
            .iter()
            .map(|t| article(t, 50, FeedTag::NewsApi))
            .collect();

        let unique = dedupe(candidates, 10);
        let mut normalized: Vec<String> =
            unique.iter().map(|a| a.title.trim().to_lowercase()).collect();
        normalized.sort();
        normalized.dedup();
        assert_eq!(normalized.len(), unique.len());
    }
}
