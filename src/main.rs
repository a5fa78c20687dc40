// Main entry point - dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_gateway_config;
use crate::infrastructure::file_repository::FileDocumentRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_gateway_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FileDocumentRepository::new(config.dashboard.file.clone()));

    // Create service (application layer)
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = create_router(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!(
        "Starting cells-kanban backend on {}, serving {}",
        addr,
        config.dashboard.file.display()
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
