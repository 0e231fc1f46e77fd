//! Application router for the calendar service
//!
//! Merges the calendar routes with a health probe, then adds CORS and
//! request tracing middleware.
//!
//! ## Endpoint Map
//!
//! | Prefix              | Module   | Description            |
//! |---------------------|----------|------------------------|
//! | `/health`           | api      | Load balancer probe    |
//! | `/api/v1/calendar*` | calendar | Event CRUD             |

use crate::calendar::{calendar_router, CalendarState, CalendarStore};
use crate::config::CalendarConfig;
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete calendar HTTP application
pub fn build_app(store: Arc<CalendarStore>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(calendar_router(CalendarState { store }))
        .layer(build_cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl+C
pub async fn serve(config: &CalendarConfig) -> crate::Result<()> {
    let store = Arc::new(CalendarStore::new(config.limits));
    let app = build_app(store, &config.server.cors_origins);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Calendar service listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calendar service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down...");
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
