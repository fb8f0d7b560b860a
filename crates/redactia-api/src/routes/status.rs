use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use redactia_core::models::status::StatusCheck;
use redactia_store::status as store;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Record a client status ping and echo the stored check back.
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(req): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = StatusCheck::new(req.client_name);
    store::append_status_check(&state.db, &check).await?;
    Ok(Json(check))
}

/// List every recorded status check, oldest first.
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = store::list_status_checks(&state.db).await?;
    Ok(Json(checks))
}
