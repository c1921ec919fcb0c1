//! AI highlight generation endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Request body for highlight generation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHighlightsRequest {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    #[serde(default)]
    pub product_tags: Vec<String>,
    /// Cache key; requests without one bypass the cache.
    pub product_id: Option<String>,
}

/// Response body for highlight generation.
#[derive(Debug, Serialize)]
pub struct GenerateHighlightsResponse {
    pub highlights: Vec<String>,
}

/// Generate marketing highlights for a product.
///
/// Requires a non-empty product name and description; responds 400 with an
/// `error` field otherwise. Upstream failures respond 500 with `error` and
/// `details` fields.
#[instrument(skip(state, request))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateHighlightsRequest>,
) -> Result<Json<GenerateHighlightsResponse>> {
    let name = request
        .product_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("productName and productDescription are required".to_string())
        })?;
    let description = request
        .product_description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("productName and productDescription are required".to_string())
        })?;

    let highlights = state
        .highlights()
        .generate(
            name,
            description,
            &request.product_tags,
            request.product_id.as_deref(),
        )
        .await?;

    Ok(Json(GenerateHighlightsResponse { highlights }))
}
