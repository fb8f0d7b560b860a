//! The OpenAI chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use redactia_analysis::gateway::{CompletionGateway, GatewayError};

use crate::error::OpenAiError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "gpt-4";

const TEMPERATURE: f32 = 0.3;
const MAX_COMPLETION_TOKENS: u32 = 2000;

/// Client for the OpenAI chat-completions API.
///
/// Holds one connection pool for the process lifetime.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// One system + user exchange, returning the first choice's content.
    pub async fn chat_completion(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatRequestMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Decode(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OpenAiError::EmptyCompletion)?;

        info!(model = %self.model, reply_len = content.len(), "chat completion received");

        Ok(content)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        self.chat_completion(system_prompt, user_text)
            .await
            .map_err(|e| GatewayError::new(e.to_string()))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

/// Pull `code: message` out of an API error body, falling back to the raw
/// body text. Error codes like `insufficient_quota` must survive into the
/// message; failure classification downstream scans for them.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.code {
            Some(code) => format!("{code}: {}", parsed.error.message),
            None => parsed.error.message,
        },
        Err(_) => body.to_string(),
    }
}
