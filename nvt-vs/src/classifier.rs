//! Classifier collaborator client
//!
//! The trained fake-news model runs as a separate process reachable over
//! HTTP. The service treats it as optional: when no sidecar URL is configured
//! or a call fails, verification proceeds without the ML sub-result.

use std::sync::Arc;

use nvt_common::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::sources::Transport;

/// One classifier prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label, e.g. "real" or "fake"
    pub prediction: String,
    /// Confidence of the winning class
    pub confidence: f64,
    pub probability_real: f64,
    pub probability_fake: f64,
}

/// HTTP client for the classifier sidecar
pub struct ClassifierClient {
    transport: Arc<Transport>,
    base_url: String,
}

impl ClassifierClient {
    pub fn new(transport: Arc<Transport>, base_url: String) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the sidecar for a prediction.
    pub async fn predict(&self, text: &str) -> Result<Prediction> {
        let url = format!("{}/predict", self.base_url);
        self.transport.post_json(&url, &json!({ "text": text })).await
    }

    /// Prediction as an optional sub-result: failures are logged and omitted.
    pub async fn predict_or_none(&self, text: &str) -> Option<Prediction> {
        match self.predict(text).await {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!(error = %e, "Classifier unavailable, omitting ML result");
                None
            }
        }
    }
}
