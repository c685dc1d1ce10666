//! Update operation handler.
//!
//! `PUT /api/{collection}/{id}` - replaces every creation-shape field with
//! the supplied values. Identity and creation timestamp are not part of the
//! creation shape and therefore survive any update, no matter what the
//! payload contains.

use axum::{
    Json,
    extract::{Path, State},
};
use medibase_model::Record;
use medibase_persistence::RecordStore;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the update operation.
///
/// Returns the updated stored record, or a kind-specific 404 if no record
/// has the given identity.
pub async fn update_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(input): Json<R::Create>,
) -> ApiResult<Json<R>>
where
    S: RecordStore,
    R: Record,
{
    let updated = state.store().replace_fields::<R>(&id, &input).await?;
    debug!(kind = %R::KIND, id = %id, "Record updated");
    Ok(Json(updated))
}
