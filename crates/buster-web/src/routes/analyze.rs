//! Document analysis endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use buster_core::analysis;
use buster_core::image::ImagePayload;
use buster_core::{AnalysisResult, BusterError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/analyze - Simplify a document image into four fields.
///
/// Checks run in order: credential, body, image fields. A reply the model
/// got wrong is still a `200` carrying the fallback result.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<ImagePayload>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let model = state.analyzer.as_ref().ok_or(BusterError::MissingApiKey)?;

    let Json(payload) = payload.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    let image = payload.decode()?;
    debug!(mime_type = %image.mime_type, size = image.bytes.len(), "Analyzing uploaded image");

    let result = analysis::analyze_document(&**model, &image).await?;
    Ok(Json(result))
}
