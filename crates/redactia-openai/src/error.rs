use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("OpenAI API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response decoding failed: {0}")]
    Decode(String),

    #[error("completion had no message content")]
    EmptyCompletion,
}
