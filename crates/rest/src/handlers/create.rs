//! Create operation handler.
//!
//! `POST /api/{collection}` - mints a stored record from the client payload
//! and persists it, returning the stored shape in full.

use axum::{Json, extract::State};
use medibase_model::Record;
use medibase_persistence::RecordStore;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the create operation.
///
/// The identity and creation timestamp are assigned here, once; the client
/// cannot supply either. Fields missing from the payload that have documented
/// defaults receive them during deserialization or minting.
pub async fn create_handler<S, R>(
    State(state): State<AppState<S>>,
    Json(input): Json<R::Create>,
) -> ApiResult<Json<R>>
where
    S: RecordStore,
    R: Record,
{
    let record: R = state.minter().mint(input);
    state.store().insert(&record).await?;

    debug!(kind = %R::KIND, id = %record.id(), "Record created");

    Ok(Json(record))
}
