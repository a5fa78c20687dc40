// HTTP request handlers
use crate::application::document_repository::DocumentError;
use crate::domain::dashboard::DashboardDocument;
use crate::domain::status::ServiceStatus;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use std::sync::Arc;

/// Fixed status payload, independent of filesystem state
pub async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus::online())
}

/// Raw tasks sequence from the dashboard document
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    match state.dashboard_service.tasks().await {
        Ok(tasks) => Ok(Json(tasks)),
        Err(e) => Err(internal_error(e)),
    }
}

/// Full dashboard snapshot with per-field defaults
pub async fn dashboard_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardDocument>, StatusCode> {
    match state.dashboard_service.snapshot().await {
        Ok(document) => Ok(Json(document)),
        Err(e) => Err(internal_error(e)),
    }
}

// A corrupt or unreadable file is distinct from an absent one: the absent case
// already answered with defaults inside the service, so anything arriving here
// is a real failure.
fn internal_error(e: DocumentError) -> StatusCode {
    tracing::error!("failed to load dashboard document: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
