//! Content Quality Analyzer
//!
//! Scores the claim text itself for verifiable and sensational markers,
//! independent of any fetched articles. All signals are surface/lexical.
//!
//! # Scoring
//! - +15 for each of: numbers, dates, names, quotes, attribution words
//! - +10 when emotional-word count < 3
//! - +10 when exaggeration-word count < 2
//! - +5 when length > 50 characters
//! - Capped at 100

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static NUMBERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static regex compiles"));

/// Numeric dates (1/5/2026, 01-05-26) or month names, checked on lowercased text
static DATES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(january|february|march|april|may|june|july|august|september|october|november|december)\b",
    )
    .expect("static regex compiles")
});

/// "Firstname Lastname" shaped capitalized bigram, checked on the original text
static NAMES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("static regex compiles"));

static EMOTIONAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(amazing|incredible|shocking|terrible|wonderful|horrible|fantastic|awful)\b")
        .expect("static regex compiles")
});

static EXAGGERATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(always|never|everyone|nobody|completely|absolutely|totally|entirely)\b")
        .expect("static regex compiles")
});

/// Attribution markers, substring-checked on lowercased text
const ATTRIBUTION_WORDS: [&str; 5] = ["according to", "said", "reported", "announced", "confirmed"];

const EMOTIONAL_MAX: usize = 3;
const EXAGGERATION_MAX: usize = 2;
const LENGTH_BONUS_THRESHOLD: usize = 50;

/// Lexical features and quality score for one claim text
#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    /// Claim length in characters
    pub length: usize,
    pub has_numbers: bool,
    pub has_dates: bool,
    pub has_names: bool,
    pub has_quotes: bool,
    pub has_sources: bool,
    /// Count of emotional-language words
    pub emotional_language: usize,
    /// Count of absolutist exaggeration words
    pub exaggeration_words: usize,
    /// Combined score in [0,100]
    pub quality_score: u32,
}

/// Analyze the quality and characteristics of the claim text.
pub fn analyze(text: &str) -> ContentAnalysis {
    let lower = text.to_lowercase();

    let length = text.chars().count();
    let has_numbers = NUMBERS_RE.is_match(text);
    let has_dates = DATES_RE.is_match(&lower);
    let has_names = NAMES_RE.is_match(text);
    let has_quotes = text.matches('"').count() >= 2;
    let has_sources = ATTRIBUTION_WORDS.iter().any(|word| lower.contains(word));
    let emotional_language = EMOTIONAL_RE.find_iter(&lower).count();
    let exaggeration_words = EXAGGERATION_RE.find_iter(&lower).count();

    let mut quality_score: u32 = 0;
    for present in [has_numbers, has_dates, has_names, has_quotes, has_sources] {
        if present {
            quality_score += 15;
        }
    }
    if emotional_language < EMOTIONAL_MAX {
        quality_score += 10;
    }
    if exaggeration_words < EXAGGERATION_MAX {
        quality_score += 10;
    }
    if length > LENGTH_BONUS_THRESHOLD {
        quality_score += 5;
    }

    ContentAnalysis {
        length,
        has_numbers,
        has_dates,
        has_names,
        has_quotes,
        has_sources,
        emotional_language,
        exaggeration_words,
        quality_score: quality_score.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_always_in_range() {
        for text in [
            "",
            "short",
            "Officials confirmed on January 5 that Jane Doe said \"quoted\" \"twice\" about 50 numbers in a statement long enough for the bonus.",
        ] {
            let analysis = analyze(text);
            assert!(analysis.quality_score <= 100);
        }
    }

    #[test]
    fn test_month_name_flips_has_dates_and_adds_exactly_15() {
        let base = "The committee released its full findings to local reporters";
        let with_month = "The committee released its full findings to local reporters in March";

        let before = analyze(base);
        let after = analyze(with_month);

        assert!(!before.has_dates);
        assert!(after.has_dates);
        assert_eq!(after.quality_score, before.quality_score + 15);
    }

    #[test]
    fn test_numeric_date_detected() {
        let analysis = analyze("Filed on 12/31/2024 by the clerk");
        assert!(analysis.has_dates);
    }

    #[test]
    fn test_capitalized_bigram_counts_as_name() {
        assert!(analyze("President Joe Biden spoke").has_names);
        assert!(!analyze("the president spoke").has_names);
    }

    #[test]
    fn test_quotes_require_two_marks() {
        assert!(!analyze("He called it a \"landmark ruling").has_quotes);
        assert!(analyze("He called it a \"landmark ruling\"").has_quotes);
    }

    #[test]
    fn test_attribution_words_detected_case_insensitively() {
        assert!(analyze("According to officials, the vote passed").has_sources);
        assert!(!analyze("The vote passed without comment").has_sources);
    }

    #[test]
    fn test_emotional_and_exaggeration_counts() {
        let analysis = analyze("shocking and terrible news that everyone absolutely believes");
        assert_eq!(analysis.emotional_language, 2);
        assert_eq!(analysis.exaggeration_words, 2);
        // Exaggeration count of 2 forfeits that +10 bonus
        let calm = analyze("shocking and terrible news that many people believe today");
        assert_eq!(calm.quality_score, analysis.quality_score + 10);
    }

    #[test]
    fn test_full_marks_reachable() {
        let text = "Mayor Jane Smith announced on January 5 that turnout reached 50 percent, \
                    saying \"the count is final\" and \"certified\" according to officials.";
        let analysis = analyze(text);
        assert_eq!(analysis.quality_score, 100);
    }
}
