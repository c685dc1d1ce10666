//! Status patch handlers.
//!
//! `PATCH /api/appointments/{id}/status?status=...` and
//! `PATCH /api/bills/{id}/status?payment_status=...` - each replaces exactly
//! one field of one record, leaving every other field byte-identical. The new
//! value arrives as a query parameter and is a free-form string; no
//! transition graph is enforced.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use medibase_model::EntityKind;
use medibase_persistence::RecordStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Query parameters for the appointment status patch.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// The new status value.
    pub status: String,
}

/// Query parameters for the bill payment status patch.
#[derive(Debug, Deserialize)]
pub struct PaymentStatusQuery {
    /// The new payment status value.
    pub payment_status: String,
}

/// Handler for the appointment status patch.
pub async fn appointment_status_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Value>>
where
    S: RecordStore,
{
    state
        .store()
        .set_field(EntityKind::Appointment, &id, "status", &query.status)
        .await?;

    debug!(id = %id, status = %query.status, "Appointment status updated");

    Ok(Json(json!({ "message": "Status updated successfully" })))
}

/// Handler for the bill payment status patch.
pub async fn bill_status_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<PaymentStatusQuery>,
) -> ApiResult<Json<Value>>
where
    S: RecordStore,
{
    state
        .store()
        .set_field(EntityKind::Bill, &id, "payment_status", &query.payment_status)
        .await?;

    debug!(id = %id, payment_status = %query.payment_status, "Bill payment status updated");

    Ok(Json(json!({ "message": "Payment status updated successfully" })))
}
