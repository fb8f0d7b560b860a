//! redactia-openai
//!
//! OpenAI chat-completions client implementing the completion gateway.

pub mod client;
pub mod error;
