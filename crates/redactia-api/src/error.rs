use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use redactia_analysis::error::AnalysisError;
use redactia_core::error::ValidationError;
use redactia_store::error::StoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Analysis(AnalysisError),
    Store(StoreError),
}

/// Error body shape the frontend reads: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

const MSG_MISSING_KEY: &str = "API key not configured";
const MSG_QUOTA: &str =
    "Balance de créditos insuficiente en OpenAI. Por favor, recarga tu balance.";
const MSG_RATE_LIMIT: &str = "Límite de uso excedido. Por favor, intenta en unos minutos.";
const MSG_ANALYSIS_FAILED: &str = "Error al procesar el análisis. Por favor, intenta de nuevo.";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::Analysis(AnalysisError::MissingApiKey) => {
                tracing::error!("analysis requested without a configured API key");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_MISSING_KEY.to_string())
            }
            ApiError::Analysis(AnalysisError::QuotaExceeded(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, MSG_QUOTA.to_string())
            }
            ApiError::Analysis(AnalysisError::RateLimited(_)) => {
                (StatusCode::TOO_MANY_REQUESTS, MSG_RATE_LIMIT.to_string())
            }
            ApiError::Analysis(e) => {
                tracing::error!(error = %e, "analysis failed");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_ANALYSIS_FAILED.to_string())
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        ApiError::Analysis(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}
