//! Service configuration
//!
//! Settings resolve through the standard chain: environment variable over
//! TOML file over compiled default. The TOML file lives at
//! `~/.config/nvt/nvt-vs.toml` (or `/etc/nvt/nvt-vs.toml`); every field is
//! optional.

use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::WeightStrategy;

/// Full service configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    pub service: ServiceSection,
    pub search: SearchSection,
    pub cache: CacheSection,
    pub retry: RetrySection,
    pub verdict: VerdictSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// HTTP listen port
    pub port: u16,
    /// NewsAPI key; the NewsAPI adapter is skipped when absent
    pub news_api_key: Option<String>,
    /// Classifier sidecar base URL; ML sub-results are omitted when absent
    pub classifier_url: Option<String>,
    /// Outbound user agent (some feeds reject the default reqwest one)
    pub user_agent: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            port: 5741,
            news_api_key: None,
            classifier_url: None,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Per-request timeout for one adapter call, seconds
    pub timeout_secs: u64,
    /// Overall fan-out deadline, seconds
    pub overall_deadline_secs: u64,
    /// Result cap per query-parameterized source
    pub max_results_per_source: usize,
    /// Result cap per top-stories sub-feed
    pub top_stories_per_feed: usize,
    /// Minimum title length considered valid
    pub min_title_len: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            overall_deadline_secs: 15,
            max_results_per_source: 10,
            top_stories_per_feed: 5,
            min_title_len: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    pub enabled: bool,
    /// Entry max age, seconds
    pub ttl_secs: u64,
    pub max_entries: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: 300,
            max_entries: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrySection {
    /// Retry attempts on transient server errors
    pub max_retries: u32,
    /// Base backoff delay, seconds
    pub delay_secs: u64,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_secs: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VerdictSection {
    pub weight_strategy: WeightStrategy,
}

impl ServiceConfig {
    /// Resolve configuration: TOML file (when present) with env overrides.
    pub fn resolve() -> Self {
        let mut config = match nvt_common::config::config_file_path("nvt-vs") {
            Ok(path) => match nvt_common::config::load_toml::<ServiceConfig>(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "Loaded configuration file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Config file unusable, using defaults");
                    ServiceConfig::default()
                }
            },
            Err(_) => {
                info!("No configuration file found, using defaults");
                ServiceConfig::default()
            }
        };

        config.apply_env();
        config
    }

    /// Apply environment-variable overrides (highest priority).
    pub fn apply_env(&mut self) {
        use nvt_common::config::env_var;

        if let Some(port) = env_var("NVT_PORT").and_then(|v| v.parse().ok()) {
            self.service.port = port;
        }
        if let Some(key) = env_var("NVT_NEWS_API_KEY") {
            self.service.news_api_key = Some(key);
        }
        if let Some(url) = env_var("NVT_CLASSIFIER_URL") {
            self.service.classifier_url = Some(url);
        }
        if let Some(strategy) = env_var("NVT_WEIGHT_STRATEGY") {
            match strategy.as_str() {
                "capped_bonus" => self.verdict.weight_strategy = WeightStrategy::CappedBonus,
                "normalized" => self.verdict.weight_strategy = WeightStrategy::Normalized,
                other => warn!(value = other, "Unknown NVT_WEIGHT_STRATEGY, keeping current"),
            }
        }
    }
}
