use thiserror::Error;

/// Failures of the analysis pipeline.
///
/// Variant messages are internal diagnostics; the HTTP layer owns the
/// client-facing text and maps each variant to its status code.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key configured for the completion gateway")]
    MissingApiKey,

    #[error("provider quota exhausted: {0}")]
    QuotaExceeded(String),

    #[error("provider rate limit hit: {0}")]
    RateLimited(String),

    #[error("gateway call failed: {0}")]
    Gateway(String),

    #[error("completion is not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("completion did not conform to expected schema: {0}")]
    SchemaViolation(String),
}
