//! Fact-Check Heuristic Engine
//!
//! Pattern-matches the claim text for verifiable-claim markers and red-flag
//! wording. Each positive indicator and each red-flag family contributes at
//! most one point per claim, however many times it occurs.
//!
//! Score = 20*verifiable + 20*specific + 20*attributable - 15*red_flags,
//! clamped to [0,100].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Percentages or large numbers with a unit. The percent alternative carries
/// no trailing boundary: `%` is a non-word character, so `\b` after it can
/// never match before whitespace or end of text.
static VERIFIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+%|\b\d+\s+(million|billion|thousand)\b").expect("static regex compiles")
});

/// Clock times, with or without am/pm
static SPECIFIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}\b|\b\d{1,2}:\d{2}\s*(am|pm)\b").expect("static regex compiles")
});

/// Attribution verbs
static ATTRIBUTABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(according to|said|reported|announced|confirmed)\b")
        .expect("static regex compiles")
});

/// Red-flag pattern families, checked against lowercased text. One point per
/// family, not per occurrence.
static RED_FLAG_FAMILIES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"\b(conspiracy|cover-up|secret|hidden|suppressed)\b")
            .expect("static regex compiles"),
        Regex::new(r"\b100%|\b(guaranteed|definitely|absolutely)\b")
            .expect("static regex compiles"),
        Regex::new(r"\b(urgent|breaking|exclusive|shocking)\b").expect("static regex compiles"),
        Regex::new(r"\b(they don't want you to know|mainstream media won't report)\b")
            .expect("static regex compiles"),
    ]
});

/// Indicator counts and combined fact score for one claim
#[derive(Debug, Clone, Serialize)]
pub struct FactCheckAnalysis {
    pub verifiable_claims: u32,
    pub specific_details: u32,
    pub attributable_statements: u32,
    pub red_flags: u32,
    /// Combined score in [0,100]
    pub fact_score: u32,
}

/// Check the claim text for fact-checking indicators.
pub fn analyze(text: &str) -> FactCheckAnalysis {
    let lower = text.to_lowercase();

    let verifiable_claims = u32::from(VERIFIABLE_RE.is_match(text));
    let specific_details = u32::from(SPECIFIC_RE.is_match(text));
    let attributable_statements = u32::from(ATTRIBUTABLE_RE.is_match(text));

    let red_flags = RED_FLAG_FAMILIES
        .iter()
        .filter(|family| family.is_match(&lower))
        .count() as u32;

    let raw = 20 * verifiable_claims as i64 + 20 * specific_details as i64
        + 20 * attributable_statements as i64
        - 15 * red_flags as i64;
    let fact_score = raw.clamp(0, 100) as u32;

    FactCheckAnalysis {
        verifiable_claims,
        specific_details,
        attributable_statements,
        red_flags,
        fact_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_counts_as_verifiable() {
        let analysis = analyze("Turnout reached 50% according to officials");
        assert_eq!(analysis.verifiable_claims, 1);
        assert_eq!(analysis.attributable_statements, 1);
        assert_eq!(analysis.fact_score, 40);
    }

    #[test]
    fn test_large_number_with_unit_counts_as_verifiable() {
        assert_eq!(analyze("The program costs 3 billion dollars").verifiable_claims, 1);
        assert_eq!(analyze("The program costs billions").verifiable_claims, 0);
    }

    #[test]
    fn test_clock_time_counts_as_specific_detail() {
        assert_eq!(analyze("The vote closed at 11:45 pm").specific_details, 1);
        assert_eq!(analyze("The vote closed late at night").specific_details, 0);
    }

    #[test]
    fn test_multiple_matches_in_one_family_count_once() {
        // "breaking" and "shocking" are the same urgency family
        let analysis = analyze("breaking and shocking developments");
        assert_eq!(analysis.red_flags, 1);
    }

    #[test]
    fn test_one_point_per_family_across_families() {
        let analysis =
            analyze("SHOCKING: they don't want you to know this secret conspiracy, 100% guaranteed!");
        assert_eq!(analysis.red_flags, 4);
        assert_eq!(analysis.fact_score, 0);
    }

    #[test]
    fn test_score_floor_is_zero() {
        let analysis = analyze("urgent secret conspiracy guaranteed");
        assert!(analysis.fact_score == 0);
        assert!(analysis.red_flags >= 3);
    }

    #[test]
    fn test_indicators_capped_at_one_each() {
        let analysis = analyze("50% and 70% and 3 million and 4 billion");
        assert_eq!(analysis.verifiable_claims, 1);
        assert_eq!(analysis.fact_score, 20);
    }
}
