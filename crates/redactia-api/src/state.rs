use std::sync::Arc;

use mongodb::Database;

use redactia_analysis::analyzer::Analyzer;
use redactia_openai::client::OpenAiClient;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Both handles are built once at startup: the database handle is internally
/// pooled and cheap to clone, the analyzer is immutable behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub analyzer: Arc<Analyzer<OpenAiClient>>,
}
