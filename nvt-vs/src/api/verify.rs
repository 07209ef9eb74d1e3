//! Verification API handlers
//!
//! POST /verify (classifier + online), POST /verify-online (online only),
//! POST /predict (classifier only). Empty claim text is rejected before any
//! fetch.

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Prediction;
use crate::error::{ApiError, ApiResult};
use crate::models::VerificationReport;
use crate::AppState;

/// Request body shared by the verification endpoints
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /verify response
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub text: String,
    /// Omitted when the classifier collaborator is unavailable
    pub ml_prediction: Option<Prediction>,
    pub online_verification: VerificationReport,
    pub timestamp: DateTime<Utc>,
}

/// POST /predict response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub text: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

fn validated_text(request: &VerifyRequest) -> ApiResult<&str> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }
    Ok(text)
}

/// POST /verify-online
///
/// Pure online verification, no ML.
pub async fn verify_online(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<VerificationReport>> {
    let text = validated_text(&request)?;
    let report = state.pipeline.verify(text).await;
    Ok(Json(report))
}

/// POST /verify
///
/// Combined verification: classifier prediction plus online sources. The
/// classifier being down never fails the request.
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<VerifyResponse>> {
    let text = validated_text(&request)?;

    let ml_prediction = match &state.classifier {
        Some(classifier) => classifier.predict_or_none(text).await,
        None => None,
    };

    let online_verification = state.pipeline.verify(text).await;

    Ok(Json(VerifyResponse {
        text: text.to_string(),
        ml_prediction,
        online_verification,
        timestamp: Utc::now(),
    }))
}

/// POST /predict
///
/// Classifier-only prediction; 503 when the collaborator is not configured.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let text = validated_text(&request)?;

    let classifier = state
        .classifier
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("Classifier not configured".to_string()))?;

    let prediction = classifier
        .predict(text)
        .await
        .map_err(|e| ApiError::Unavailable(format!("Classifier request failed: {}", e)))?;

    Ok(Json(PredictResponse {
        text: text.to_string(),
        prediction,
    }))
}

/// Build verification routes
pub fn verify_routes() -> Router<AppState> {
    Router::new()
        .route("/verify", post(verify))
        .route("/verify-online", post(verify_online))
        .route("/predict", post(predict))
}
