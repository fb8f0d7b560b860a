//! redactia-analysis
//!
//! The analysis pipeline: prompt injection, gateway invocation, failure
//! classification, and strict parsing of the model's reply into clarity
//! suggestions.

pub mod analyzer;
pub mod error;
pub mod gateway;
pub mod parse;
pub mod prompt;
