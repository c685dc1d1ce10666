//! # medibase-rest - Hospital Records REST API
//!
//! This crate exposes the Medibase record-management operations over HTTP.
//! Every route maps 1:1 to one repository call against a
//! [`RecordStore`](medibase_persistence::RecordStore) backend; results (or a
//! kind-specific not-found failure) are returned verbatim. There is no
//! caching, batching, or cross-request state.
//!
//! ## API Endpoints
//!
//! All entity routes live under `/api`:
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | create | POST | `/api/{collection}` |
//! | list | GET | `/api/{collection}` |
//! | get-by-id | GET | `/api/{collection}/{id}` (patients, doctors) |
//! | update | PUT | `/api/{collection}/{id}` (patients, doctors, appointments, medicines) |
//! | delete | DELETE | `/api/{collection}/{id}` (patients, doctors, staff, appointments, medicines) |
//! | status patch | PATCH | `/api/appointments/{id}/status`, `/api/bills/{id}/status` |
//! | patient records | GET | `/api/medical-records/patient/{patient_id}` |
//! | dashboard | GET | `/api/dashboard/stats` |
//!
//! The asymmetries (no single-item GET for staff, appointments, bills, or
//! medicines; no update for staff or medical records; no delete for bills or
//! medical records) mirror the observed behavior of the system this API
//! serves and are deliberate.
//!
//! ## Error Handling
//!
//! Failed lookups return 404 with a body of `{"detail": "<Kind> not found"}`.
//! Malformed payloads are rejected by the JSON extractor before any
//! repository call runs. Storage failures propagate as 500 responses; there
//! are no retries.
//!
//! ## Configuration
//!
//! The server is configured via environment variables (see [`ServerConfig`]):
//! `MONGO_URL`, `DB_NAME`, `CORS_ORIGINS` (comma-separated, default `*`),
//! `HOST`, `PORT`, and `LOG_LEVEL`.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use medibase_persistence::RecordStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: RecordStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Wires the route table to the given storage backend, then layers request
/// tracing and CORS on top.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: RecordStore + 'static,
{
    info!(backend = %store.backend_name(), "Creating REST API");

    let cors = build_cors_layer(&config);
    let state = AppState::new(Arc::new(store), config);
    let router = routing::api_routes::create_routes(state);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

/// Builds the CORS layer from the configured origin list.
///
/// `*` (the default) allows any origin; otherwise the comma-separated
/// entries are parsed individually and unparseable ones are dropped.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "medibase_rest={level},medibase_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
