use axum::Json;
use serde_json::{json, Value};

/// Hello endpoint, doubles as a liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
