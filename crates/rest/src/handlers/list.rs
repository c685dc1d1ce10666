//! List operation handlers.
//!
//! `GET /api/{collection}` - returns every stored record of a kind, in stored
//! order, capped at 1000 entries. Also hosts the one filtered listing the API
//! exposes: medical records scoped to a patient identity.

use axum::{
    Json,
    extract::{Path, State},
};
use medibase_model::{MedicalRecord, Record};
use medibase_persistence::RecordStore;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the list operation.
pub async fn list_handler<S, R>(State(state): State<AppState<S>>) -> ApiResult<Json<Vec<R>>>
where
    S: RecordStore,
    R: Record,
{
    let records = state.store().find_all::<R>().await?;
    debug!(kind = %R::KIND, count = records.len(), "Listed records");
    Ok(Json(records))
}

/// Handler for the patient-scoped medical record listing.
///
/// `GET /api/medical-records/patient/{patient_id}` - exact match on the
/// stored `patient_id` snapshot; an unknown patient identity yields an empty
/// list, not a failure.
pub async fn patient_records_handler<S>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<String>,
) -> ApiResult<Json<Vec<MedicalRecord>>>
where
    S: RecordStore,
{
    let records = state
        .store()
        .find_by_field::<MedicalRecord>("patient_id", &patient_id)
        .await?;

    debug!(
        patient_id = %patient_id,
        count = records.len(),
        "Listed medical records for patient"
    );

    Ok(Json(records))
}
