//! Gearbox API Server
//!
//! A car catalog service: brands and their models over PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCatalogStore;
use app::CatalogService;
use config::Config;
use domain::ports::CatalogStore;

/// Application state shared across all handlers
pub struct AppState<S: CatalogStore> {
    pub catalog_service: Arc<CatalogService<S>>,
}

impl<S: CatalogStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: self.catalog_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state.
///
/// Generic over the store so tests can drive the full HTTP surface against
/// the in-memory implementation.
pub fn router<S: CatalogStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog/brands", post(handlers::save_brand::<S>))
        .route("/catalog/brands/:id", get(handlers::get_brand::<S>))
        .route("/catalog/models", post(handlers::save_model::<S>))
        .route("/catalog/models/:id", get(handlers::get_model::<S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gearbox_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gearbox API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters and services
    let store = Arc::new(PostgresCatalogStore::new(db));
    let catalog_service = Arc::new(CatalogService::new(store));

    let state = AppState { catalog_service };
    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
