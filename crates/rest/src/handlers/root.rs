//! API root handler.

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /api/` - a fixed identification message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hospital Management System API" }))
}
