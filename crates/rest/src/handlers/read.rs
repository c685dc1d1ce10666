//! Get-by-id operation handler.
//!
//! `GET /api/{collection}/{id}` - returns the record with the given identity
//! or a kind-specific 404.

use axum::{
    Json,
    extract::{Path, State},
};
use medibase_model::Record;
use medibase_persistence::RecordStore;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Handler for the get-by-id operation.
pub async fn read_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<R>>
where
    S: RecordStore,
    R: Record,
{
    match state.store().find_by_id::<R>(&id).await? {
        Some(record) => Ok(Json(record)),
        None => {
            debug!(kind = %R::KIND, id = %id, "Record not found");
            Err(ApiError::NotFound { kind: R::KIND })
        }
    }
}
