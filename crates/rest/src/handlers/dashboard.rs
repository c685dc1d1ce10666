//! Dashboard aggregation handler.
//!
//! `GET /api/dashboard/stats` - one read-only operation returning the record
//! counts the dashboard displays. The five counts are computed independently
//! at call time; concurrent writes between them can produce a momentarily
//! inconsistent snapshot, which is accepted.

use axum::{Json, extract::State};
use medibase_model::EntityKind;
use medibase_persistence::RecordStore;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

/// The fixed-shape count summary served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Count of all patients.
    pub total_patients: u64,
    /// Count of all doctors.
    pub total_doctors: u64,
    /// Count of all appointments.
    pub total_appointments: u64,
    /// Count of all staff members.
    pub total_staff: u64,
    /// Count of bills whose payment status is exactly `"pending"`.
    pub pending_bills: u64,
}

/// Handler for the dashboard aggregation.
pub async fn dashboard_handler<S>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<DashboardStats>>
where
    S: RecordStore,
{
    let store = state.store();

    let stats = DashboardStats {
        total_patients: store.count(EntityKind::Patient).await?,
        total_doctors: store.count(EntityKind::Doctor).await?,
        total_appointments: store.count(EntityKind::Appointment).await?,
        total_staff: store.count(EntityKind::Staff).await?,
        pending_bills: store
            .count_by_field(EntityKind::Bill, "payment_status", "pending")
            .await?,
    };

    Ok(Json(stats))
}
