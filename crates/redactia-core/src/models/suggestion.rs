use serde::{Deserialize, Serialize};

/// One clarity finding: a problematic fragment, the diagnosed problem, and
/// a clearer rewrite. Field names are the wire contract with the frontend
/// and stay in Spanish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub original: String,
    pub problema: String,
    pub sugerencia: String,
}

/// The full result of one analysis, in the order the model produced it.
/// An empty list is a valid result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub sugerencias: Vec<Suggestion>,
}
