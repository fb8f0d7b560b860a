//! Strict parsing of the model's JSON reply.
//!
//! The reply is untrusted text. It must parse as a JSON object with a
//! `sugerencias` array of objects carrying `original`, `problema`, and
//! `sugerencia` strings (`id` optional). Anything else rejects the whole
//! reply; there are no partial results and no repair attempts.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use redactia_core::models::suggestion::{AnalysisResponse, Suggestion};

use crate::error::AnalysisError;

/// Outage markers searched for in provider error or reply text, lowercased
/// substring containment, quota before rate limit. Known imprecision: text
/// that merely quotes a marker is misclassified. The lists must not grow.
const QUOTA_MARKERS: [&str; 2] = ["insufficient_quota", "quota"];
const RATE_LIMIT_MARKER: &str = "rate_limit";

#[derive(Debug, Clone, Copy)]
pub(crate) enum ProviderOutage {
    Quota,
    RateLimited,
}

/// Scan text for provider outage markers.
pub(crate) fn detect_outage(text: &str) -> Option<ProviderOutage> {
    let lowered = text.to_lowercase();
    if QUOTA_MARKERS.iter().any(|m| lowered.contains(m)) {
        Some(ProviderOutage::Quota)
    } else if lowered.contains(RATE_LIMIT_MARKER) {
        Some(ProviderOutage::RateLimited)
    } else {
        None
    }
}

/// One suggestion as the model writes it; `id` may be absent.
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    id: Option<String>,
    original: String,
    problema: String,
    sugerencia: String,
}

/// Parse a model completion into an [`AnalysisResponse`].
///
/// A completion that is not JSON at all may be provider error text that
/// leaked into the reply body, so it runs through the same outage
/// classification as a failed call before being reported as malformed.
/// Suggestions without an `id` get a fresh UUID; order is preserved.
pub fn parse_completion(completion: &str) -> Result<AnalysisResponse, AnalysisError> {
    let value: Value = match serde_json::from_str(completion) {
        Ok(v) => v,
        Err(e) => {
            return Err(match detect_outage(completion) {
                Some(ProviderOutage::Quota) => {
                    AnalysisError::QuotaExceeded(completion.to_string())
                }
                Some(ProviderOutage::RateLimited) => {
                    AnalysisError::RateLimited(completion.to_string())
                }
                None => AnalysisError::MalformedResponse(e.to_string()),
            });
        }
    };

    let Some(raw_list) = value.get("sugerencias") else {
        return Err(AnalysisError::SchemaViolation(
            "missing 'sugerencias' field".to_string(),
        ));
    };

    let raw: Vec<RawSuggestion> = serde_json::from_value(raw_list.clone())
        .map_err(|e| AnalysisError::SchemaViolation(e.to_string()))?;

    let sugerencias = raw
        .into_iter()
        .map(|r| Suggestion {
            id: r.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            original: r.original,
            problema: r.problema,
            sugerencia: r.sugerencia,
        })
        .collect();

    Ok(AnalysisResponse { sugerencias })
}
