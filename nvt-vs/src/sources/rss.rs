//! RSS item extraction
//!
//! Regex-based `<item>` extraction shared by the feed adapters. Handles the
//! CDATA wrapping and entity encoding Google News emits without pulling in a
//! full XML parser.

use once_cell::sync::Lazy;
use regex::Regex;

static ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<item\b[^>]*>(.*?)</item>").expect("static regex compiles"));
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").expect("static regex compiles"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<link\b[^>]*>(.*?)</link>").expect("static regex compiles"));
static SOURCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<source\b[^>]*>(.*?)</source>").expect("static regex compiles"));
static PUB_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<pubDate\b[^>]*>(.*?)</pubDate>").expect("static regex compiles")
});

/// One feed record, fields as the feed reported them
#[derive(Debug, Clone, Default)]
pub struct RssItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub pub_date: Option<String>,
}

fn decode_rss_text(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_start_matches("<![CDATA[")
        .trim_end_matches("]]>")
        .trim();
    trimmed
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn extract_field(item: &str, field_re: &Regex) -> Option<String> {
    field_re
        .captures(item)
        .and_then(|cap| cap.get(1))
        .map(|m| decode_rss_text(m.as_str()))
        .filter(|value| !value.is_empty())
}

/// Extract up to `limit` items from an RSS document.
pub fn parse_items(rss_xml: &str, limit: usize) -> Vec<RssItem> {
    let mut items = Vec::new();

    for item_cap in ITEM_RE.captures_iter(rss_xml) {
        if items.len() >= limit {
            break;
        }
        let Some(item_match) = item_cap.get(1) else {
            continue;
        };
        let item = item_match.as_str();

        items.push(RssItem {
            title: extract_field(item, &TITLE_RE),
            link: extract_field(item, &LINK_RE),
            source: extract_field(item, &SOURCE_RE),
            pub_date: extract_field(item, &PUB_DATE_RE),
        });
    }

    items
}
