//! Source credibility table
//!
//! Maps news source names (domains and display names) to 0-100 trust scores.
//! Constructed once at startup and shared read-only; lookups never fail, the
//! resolution chain always produces a value:
//!
//! 1. Empty name: default (50)
//! 2. Exact case-insensitive match
//! 3. Substring match in either direction, first table entry wins
//! 4. Keyword fallback (traditional-outlet words 65, blog words 45)
//! 5. Default (50)
//!
//! Iteration order of the substring pass is observable, so entries are kept
//! in their original insertion order (trust tiers descending).

/// Default score for unknown sources
pub const DEFAULT_SCORE: u8 = 50;

/// Built-in table, tier-descending. A domain and its display-name aliases
/// carry identical scores.
const DEFAULT_TABLE: &[(&str, u8)] = &[
    ("reuters.com", 98),
    ("reuters", 98),
    ("ap.org", 97),
    ("apnews.com", 97),
    ("associated press", 97),
    ("bbc.com", 96),
    ("bbc.co.uk", 96),
    ("bbc", 96),
    ("npr.org", 95),
    ("npr", 95),
    ("pbs.org", 94),
    ("pbs", 94),
    ("nytimes.com", 88),
    ("nytimes", 88),
    ("washingtonpost.com", 87),
    ("washington post", 87),
    ("wsj.com", 86),
    ("wall street journal", 86),
    ("economist.com", 85),
    ("economist", 85),
    ("time.com", 84),
    ("time", 84),
    ("cnn.com", 83),
    ("cnn", 83),
    ("abcnews.go.com", 82),
    ("abc news", 82),
    ("cbsnews.com", 81),
    ("cbs news", 81),
    ("nbcnews.com", 80),
    ("nbc news", 80),
    ("usatoday.com", 78),
    ("usa today", 78),
    ("foxnews.com", 75),
    ("fox news", 75),
    ("msnbc.com", 74),
    ("msnbc", 74),
    ("huffpost.com", 72),
    ("huffington post", 72),
    ("vox.com", 71),
    ("vox", 71),
    ("theguardian.com", 68),
    ("guardian", 68),
    ("independent.co.uk", 65),
    ("independent", 65),
    ("telegraph.co.uk", 64),
    ("telegraph", 64),
    ("dailymail.co.uk", 62),
    ("daily mail", 62),
    ("forbes.com", 58),
    ("forbes", 58),
    ("businessinsider.com", 55),
    ("business insider", 55),
    ("techcrunch.com", 54),
    ("techcrunch", 54),
    ("buzzfeed.com", 52),
    ("buzzfeed", 52),
];

const TRADITIONAL_WORDS: [&str; 5] = ["news", "times", "post", "journal", "tribune"];
const BLOG_WORDS: [&str; 3] = ["blog", "medium", "substack"];

const TRADITIONAL_FALLBACK_SCORE: u8 = 65;
const BLOG_FALLBACK_SCORE: u8 = 45;

/// Immutable source-name to trust-score mapping
#[derive(Debug, Clone)]
pub struct CredibilityTable {
    entries: Vec<(String, u8)>,
    default_score: u8,
}

impl CredibilityTable {
    /// Build the table from the built-in tier list.
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_TABLE
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
            default_score: DEFAULT_SCORE,
        }
    }

    /// Look up the credibility score for a source name.
    pub fn score(&self, source_name: &str) -> u8 {
        let name = source_name.trim().to_lowercase();
        if name.is_empty() {
            return self.default_score;
        }

        for (key, score) in &self.entries {
            if *key == name {
                return *score;
            }
        }

        for (key, score) in &self.entries {
            if name.contains(key.as_str()) || key.contains(name.as_str()) {
                return *score;
            }
        }

        if TRADITIONAL_WORDS.iter().any(|word| name.contains(word)) {
            return TRADITIONAL_FALLBACK_SCORE;
        }
        if BLOG_WORDS.iter().any(|word| name.contains(word)) {
            return BLOG_FALLBACK_SCORE;
        }

        self.default_score
    }

    pub fn default_score(&self) -> u8 {
        self.default_score
    }
}
