use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use redactia_core::models::suggestion::AnalysisResponse;
use redactia_core::validate;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Analyze Spanish administrative text for clarity problems.
///
/// Validation runs before anything else; invalid input never reaches the
/// gateway.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let text = validate::validate_text(&req.text)?;
    let response = state.analyzer.analyze(&text).await?;
    Ok(Json(response))
}
