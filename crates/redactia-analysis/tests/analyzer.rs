use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use redactia_analysis::analyzer::Analyzer;
use redactia_analysis::error::AnalysisError;
use redactia_analysis::gateway::{CompletionGateway, GatewayError};
use redactia_core::validate::validate_text;

const TEST_PROMPT: &str = "Devuelve un JSON con sugerencias.";

/// Gateway double returning a canned reply or failure.
struct StubGateway {
    reply: Result<String, String>,
}

impl StubGateway {
    fn ok(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
        }
    }

    fn err(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_text: &str,
    ) -> Result<String, GatewayError> {
        self.reply.clone().map_err(GatewayError::new)
    }
}

/// Gateway double recording the exact prompt pair it was given.
struct RecordingGateway {
    seen: Arc<Mutex<Option<(String, String)>>>,
}

#[async_trait]
impl CompletionGateway for RecordingGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        *self.seen.lock().unwrap() = Some((system_prompt.to_string(), user_text.to_string()));
        Ok(r#"{"sugerencias": []}"#.to_string())
    }
}

#[tokio::test]
async fn canned_reply_becomes_ordered_suggestions() {
    let gateway = StubGateway::ok(
        r#"{"sugerencias": [
            {"original": "en relación a", "problema": "burocrático", "sugerencia": "sobre"},
            {"original": "procede a efectuar", "problema": "perífrasis", "sugerencia": "efectúa"}
        ]}"#,
    );
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("En relación a su escrito, se procede a efectuar la revisión.")
        .expect("valid text");

    let response = analyzer.analyze(&text).await.expect("analysis succeeds");
    assert_eq!(response.sugerencias.len(), 2);
    assert_eq!(response.sugerencias[0].sugerencia, "sobre");
    assert_eq!(response.sugerencias[1].sugerencia, "efectúa");
    assert_ne!(response.sugerencias[0].id, response.sugerencias[1].id);
}

#[tokio::test]
async fn clean_text_yields_empty_suggestions() {
    let analyzer = Analyzer::new(Some(StubGateway::ok(r#"{ "sugerencias": [] }"#)), TEST_PROMPT);
    let text = validate_text("El plazo termina el 5 de mayo.").expect("valid text");

    let response = analyzer.analyze(&text).await.expect("analysis succeeds");
    assert!(response.sugerencias.is_empty());
}

#[tokio::test]
async fn missing_gateway_fails_without_calling_anything() {
    let analyzer: Analyzer<StubGateway> = Analyzer::new(None, TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::MissingApiKey)));
}

#[tokio::test]
async fn gateway_failure_with_quota_marker_maps_to_quota_exceeded() {
    let gateway = StubGateway::err("Error code: 429 - insufficient_quota: check your plan");
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::QuotaExceeded(_))));
}

#[tokio::test]
async fn gateway_failure_with_rate_limit_marker_maps_to_rate_limited() {
    let gateway = StubGateway::err("Rate_Limit_Exceeded on requests per minute");
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::RateLimited(_))));
}

#[tokio::test]
async fn other_gateway_failures_map_to_gateway_error() {
    let gateway = StubGateway::err("connection reset by peer");
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::Gateway(_))));
}

#[tokio::test]
async fn schema_violating_reply_surfaces_as_schema_violation() {
    let gateway = StubGateway::ok(r#"{"sugerencias": [{"original": "x"}]}"#);
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::SchemaViolation(_))));
}

#[tokio::test]
async fn prose_reply_surfaces_as_malformed() {
    let gateway = StubGateway::ok("No puedo devolver JSON hoy.");
    let analyzer = Analyzer::new(Some(gateway), TEST_PROMPT);
    let text = validate_text("texto").expect("valid text");

    let result = analyzer.analyze(&text).await;
    assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));
}

/// The analyzer sends the injected prompt and the validated (trimmed) text.
#[tokio::test]
async fn injected_prompt_and_trimmed_text_reach_the_gateway() {
    let seen = Arc::new(Mutex::new(None));
    let gateway = RecordingGateway { seen: seen.clone() };
    let analyzer = Analyzer::new(Some(gateway), "política de claridad");
    let text = validate_text("  hola mundo  ").expect("valid text");

    analyzer.analyze(&text).await.expect("analysis succeeds");

    let (system, user) = seen.lock().unwrap().clone().expect("gateway was called");
    assert_eq!(system, "política de claridad");
    assert_eq!(user, "hola mundo");
}
