//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{Json, extract::State, http::StatusCode, response::{IntoResponse, Response}};
use medibase_persistence::RecordStore;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// `GET /health` - returns the backend name and the current timestamp.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Response>
where
    S: RecordStore,
{
    let health = serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health)).into_response())
}
