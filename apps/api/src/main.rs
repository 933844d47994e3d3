use axum::{Router, extract::State, routing::get};
use axum_helpers::server::{HealthCheckFuture, create_production_app, health_router, run_health_checks};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{ItemService, PgCatalog, PgItemRepository, handlers};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    // Connect to PostgreSQL with retry
    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await?;

    // Wire repositories and service
    let service = ItemService::new(PgItemRepository::new(db.clone()), PgCatalog::new(db.clone()));

    // Build router with API routes
    let api_routes = Router::new().nest("/itens", handlers::router(service));

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router
        .merge(health_router(config.app))
        .route("/ready", get(ready_handler).with_state(db.clone()));

    info!("Starting Locadora API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Error closing PostgreSQL connection: {:?}", e);
        } else {
            info!("PostgreSQL connection closed successfully");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Locadora API shutdown complete");
    Ok(())
}

/// Readiness probe: verifies the database connection is usable.
async fn ready_handler(
    State(db): State<DatabaseConnection>,
) -> Result<
    (axum::http::StatusCode, axum::Json<serde_json::Value>),
    (axum::http::StatusCode, axum::Json<serde_json::Value>),
> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
