use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a completion gateway.
///
/// The message carries the provider's error text verbatim; classification
/// into quota, rate-limit, or other happens downstream by inspecting it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A text-completion provider: one system prompt, one user message, one
/// completion. No retries and no conversation state.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError>;
}
