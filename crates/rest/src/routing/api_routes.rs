//! API route configuration.
//!
//! Defines every route of the records API. The generic handlers are
//! instantiated per entity kind here, which makes this table the single place
//! that decides which operations each kind exposes. The gaps (no single-item
//! GET for staff/appointments/bills/medicines, no update for staff or medical
//! records, no delete for bills or medical records) are deliberate.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use medibase_model::{Appointment, Bill, Doctor, MedicalRecord, Medicine, Patient, Staff};
use medibase_persistence::RecordStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all routes for the records REST API.
///
/// # Routes
///
/// ## System-level
/// - `GET /api/` - Identification message
/// - `GET /health` - Health check
/// - `GET /api/dashboard/stats` - Aggregated counts
///
/// ## Per entity
/// - Patients, Doctors: create, list, get, update, delete
/// - Staff: create, list, delete
/// - Appointments: create, list, update, status patch, delete
/// - Medical records: create, list, list-by-patient
/// - Bills: create, list, payment status patch
/// - Medicines: create, list, update, delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        // System-level routes
        .route("/api/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/api/dashboard/stats", get(handlers::dashboard_handler::<S>))
        // Patients
        .route(
            "/api/patients",
            post(handlers::create_handler::<S, Patient>).get(handlers::list_handler::<S, Patient>),
        )
        .route(
            "/api/patients/{id}",
            get(handlers::read_handler::<S, Patient>)
                .put(handlers::update_handler::<S, Patient>)
                .delete(handlers::delete_handler::<S, Patient>),
        )
        // Doctors
        .route(
            "/api/doctors",
            post(handlers::create_handler::<S, Doctor>).get(handlers::list_handler::<S, Doctor>),
        )
        .route(
            "/api/doctors/{id}",
            get(handlers::read_handler::<S, Doctor>)
                .put(handlers::update_handler::<S, Doctor>)
                .delete(handlers::delete_handler::<S, Doctor>),
        )
        // Staff
        .route(
            "/api/staff",
            post(handlers::create_handler::<S, Staff>).get(handlers::list_handler::<S, Staff>),
        )
        .route(
            "/api/staff/{id}",
            delete(handlers::delete_handler::<S, Staff>),
        )
        // Appointments
        .route(
            "/api/appointments",
            post(handlers::create_handler::<S, Appointment>)
                .get(handlers::list_handler::<S, Appointment>),
        )
        .route(
            "/api/appointments/{id}",
            put(handlers::update_handler::<S, Appointment>)
                .delete(handlers::delete_handler::<S, Appointment>),
        )
        .route(
            "/api/appointments/{id}/status",
            patch(handlers::appointment_status_handler::<S>),
        )
        // Medical records
        .route(
            "/api/medical-records",
            post(handlers::create_handler::<S, MedicalRecord>)
                .get(handlers::list_handler::<S, MedicalRecord>),
        )
        .route(
            "/api/medical-records/patient/{patient_id}",
            get(handlers::patient_records_handler::<S>),
        )
        // Bills
        .route(
            "/api/bills",
            post(handlers::create_handler::<S, Bill>).get(handlers::list_handler::<S, Bill>),
        )
        .route(
            "/api/bills/{id}/status",
            patch(handlers::bill_status_handler::<S>),
        )
        // Medicines
        .route(
            "/api/medicines",
            post(handlers::create_handler::<S, Medicine>)
                .get(handlers::list_handler::<S, Medicine>),
        )
        .route(
            "/api/medicines/{id}",
            put(handlers::update_handler::<S, Medicine>)
                .delete(handlers::delete_handler::<S, Medicine>),
        )
        // State
        .with_state(state)
}
