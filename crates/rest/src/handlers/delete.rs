//! Delete operation handler.
//!
//! `DELETE /api/{collection}/{id}` - removes the record with the given
//! identity. Deleting never cascades: referencing records in other
//! collections are left untouched.

use axum::{
    Json,
    extract::{Path, State},
};
use medibase_model::Record;
use medibase_persistence::RecordStore;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the delete operation.
///
/// Returns an acknowledgement message rather than the deleted record; a
/// second delete of the same identity is a kind-specific 404.
pub async fn delete_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>>
where
    S: RecordStore,
    R: Record,
{
    state.store().delete::<R>(&id).await?;
    debug!(kind = %R::KIND, id = %id, "Record deleted");

    Ok(Json(json!({
        "message": format!("{} deleted successfully", R::KIND)
    })))
}
