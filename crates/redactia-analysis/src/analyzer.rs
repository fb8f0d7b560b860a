use tracing::{error, info};

use redactia_core::models::suggestion::AnalysisResponse;
use redactia_core::validate::ValidatedText;

use crate::error::AnalysisError;
use crate::gateway::CompletionGateway;
use crate::parse::{self, ProviderOutage};

/// Runs the analysis pipeline: credential check, gateway call, failure
/// classification, and strict reply parsing.
///
/// The gateway is `None` when no API credential was configured at startup;
/// analysis then fails with [`AnalysisError::MissingApiKey`] before touching
/// the network.
pub struct Analyzer<G> {
    gateway: Option<G>,
    system_prompt: String,
}

impl<G: CompletionGateway> Analyzer<G> {
    pub fn new(gateway: Option<G>, system_prompt: impl Into<String>) -> Self {
        Self {
            gateway,
            system_prompt: system_prompt.into(),
        }
    }

    /// Analyze validated text, returning suggestions in model order.
    ///
    /// One gateway call per invocation, no retries. Only the input length
    /// and a truncated reply preview are logged, never the full user text.
    pub async fn analyze(&self, text: &ValidatedText) -> Result<AnalysisResponse, AnalysisError> {
        let gateway = self.gateway.as_ref().ok_or(AnalysisError::MissingApiKey)?;

        info!(chars = text.char_count(), "sending text for analysis");

        let completion = match gateway.complete(&self.system_prompt, text.as_str()).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "gateway call failed");
                return Err(classify_call_failure(e.message));
            }
        };

        info!(preview = %preview(&completion), "received completion");

        match parse::parse_completion(&completion) {
            Ok(response) => {
                info!(suggestions = response.sugerencias.len(), "analysis complete");
                Ok(response)
            }
            Err(e) => {
                error!(error = %e, preview = %preview(&completion), "completion rejected");
                Err(e)
            }
        }
    }
}

/// Map a failed gateway call onto the error taxonomy by scanning the
/// provider's message for outage markers.
fn classify_call_failure(message: String) -> AnalysisError {
    match parse::detect_outage(&message) {
        Some(ProviderOutage::Quota) => AnalysisError::QuotaExceeded(message),
        Some(ProviderOutage::RateLimited) => AnalysisError::RateLimited(message),
        None => AnalysisError::Gateway(message),
    }
}

/// First 200 code points, for logs.
fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}
