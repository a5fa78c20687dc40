// Router assembly and cross-cutting layers
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_data, list_tasks, service_status};
use crate::presentation::process_time::record_process_time;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Bodies at or below this many bytes are not worth compressing.
const COMPRESSION_MIN_BYTES: u16 = 1000;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(service_status))
        .route("/tasks", get(list_tasks))
        .route("/data", get(dashboard_data))
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(COMPRESSION_MIN_BYTES)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(record_process_time))
        .with_state(state)
}
