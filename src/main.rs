//! mergington-api server entry point.
//!
//! Starts the Axum HTTP server, seeding the activity catalog on first run.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use mergington_api::api;
use mergington_api::app_state::AppState;
use mergington_api::config::ApiConfig;
use mergington_api::persistence::{ActivityStore, Database};
use mergington_api::service::ActivityService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ApiConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting mergington-api");

    // Connect storage and run schema bootstrap
    let database = Database::connect(&config).await?;

    // Build service layer and seed the catalog if the store is empty
    let activity_service = Arc::new(ActivityService::new(ActivityStore::new(
        database.pool().clone(),
    )));
    activity_service.seed_if_empty().await?;

    // Build application state
    let app_state = AppState { activity_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
