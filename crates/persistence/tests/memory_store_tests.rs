//! Memory backend tests.
//!
//! Exercises the full `RecordStore` contract: create/read round-trips,
//! kind-specific not-found failures, full-field replacement that preserves
//! identity and creation timestamp, single-field patches, and counts.

use medibase_model::{
    Appointment, AppointmentCreate, Bill, BillCreate, EntityKind, MedicalRecord,
    MedicalRecordCreate, Patient, PatientCreate, Record, RecordMinter,
};
use medibase_persistence::{MemoryStore, RecordStore, SCAN_LIMIT, StorageError};

fn patient_input(name: &str) -> PatientCreate {
    PatientCreate {
        name: name.to_string(),
        age: 34,
        gender: "F".to_string(),
        contact: "555-0101".to_string(),
        address: "12 Elm St".to_string(),
        blood_group: "O+".to_string(),
        medical_history: String::new(),
    }
}

fn appointment_input(patient_id: &str) -> AppointmentCreate {
    AppointmentCreate {
        patient_id: patient_id.to_string(),
        patient_name: "Jane Doe".to_string(),
        doctor_id: "d1".to_string(),
        doctor_name: "Dr. Smith".to_string(),
        date: "2024-01-10".to_string(),
        time: "09:00".to_string(),
        reason: "checkup".to_string(),
        notes: String::new(),
    }
}

fn bill_input(patient_id: &str, payment_status: &str) -> BillCreate {
    BillCreate {
        patient_id: patient_id.to_string(),
        patient_name: "Jane Doe".to_string(),
        appointment_id: String::new(),
        items: "Consultation".to_string(),
        total_amount: 120.5,
        payment_status: payment_status.to_string(),
    }
}

fn record_input(patient_id: &str) -> MedicalRecordCreate {
    MedicalRecordCreate {
        patient_id: patient_id.to_string(),
        patient_name: "Jane Doe".to_string(),
        doctor_id: "d1".to_string(),
        doctor_name: "Dr. Smith".to_string(),
        date: "2024-01-10".to_string(),
        diagnosis: "Healthy".to_string(),
        prescriptions: "None".to_string(),
        tests: String::new(),
        notes: String::new(),
    }
}

async fn seed_patient(store: &MemoryStore, minter: &RecordMinter, name: &str) -> Patient {
    let patient: Patient = minter.mint(patient_input(name));
    store.insert(&patient).await.expect("insert failed");
    patient
}

#[tokio::test]
async fn test_insert_then_find_by_id_returns_equal_record() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let created = seed_patient(&store, &minter, "Jane Doe").await;
    let found = store
        .find_by_id::<Patient>(created.id())
        .await
        .expect("lookup failed")
        .expect("record missing");

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let store = MemoryStore::new();
    let found = store
        .find_by_id::<Patient>("no-such-id")
        .await
        .expect("lookup failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_consecutive_inserts_get_distinct_identities() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let first = seed_patient(&store, &minter, "Jane Doe").await;
    let second = seed_patient(&store, &minter, "Jane Doe").await;

    assert_ne!(first.id, second.id);
    assert_eq!(store.count(EntityKind::Patient).await.unwrap(), 2);
}

#[tokio::test]
async fn test_find_all_preserves_insertion_order() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let first = seed_patient(&store, &minter, "First").await;
    let second = seed_patient(&store, &minter, "Second").await;
    let third = seed_patient(&store, &minter, "Third").await;

    let all = store.find_all::<Patient>().await.expect("scan failed");
    let ids: Vec<&str> = all.iter().map(Record::id).collect();
    assert_eq!(ids, vec![first.id(), second.id(), third.id()]);
}

#[tokio::test]
async fn test_replace_fields_preserves_identity_and_timestamp() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();
    let created = seed_patient(&store, &minter, "Jane Doe").await;

    let mut input = patient_input("Jane Doe-Smith");
    input.age = 35;
    let updated = store
        .replace_fields::<Patient>(created.id(), &input)
        .await
        .expect("update failed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.registration_date, created.registration_date);
    assert_eq!(updated.name, "Jane Doe-Smith");
    assert_eq!(updated.age, 35);
}

#[tokio::test]
async fn test_replace_fields_missing_identity_is_not_found() {
    let store = MemoryStore::new();
    let err = store
        .replace_fields::<Patient>("no-such-id", &patient_input("Jane Doe"))
        .await
        .expect_err("expected not-found");
    assert!(matches!(
        err,
        StorageError::NotFound {
            kind: EntityKind::Patient
        }
    ));
}

#[tokio::test]
async fn test_delete_then_lookup_and_repeat_delete_are_not_found() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();
    let created = seed_patient(&store, &minter, "Jane Doe").await;

    store
        .delete::<Patient>(created.id())
        .await
        .expect("delete failed");

    let found = store
        .find_by_id::<Patient>(created.id())
        .await
        .expect("lookup failed");
    assert!(found.is_none());

    let err = store
        .delete::<Patient>(created.id())
        .await
        .expect_err("expected not-found");
    assert_eq!(err.to_string(), "Patient not found");
}

#[tokio::test]
async fn test_set_field_changes_only_that_field() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let appointment: Appointment = minter.mint(appointment_input("p1"));
    store.insert(&appointment).await.expect("insert failed");
    assert_eq!(appointment.status, "scheduled");

    store
        .set_field(EntityKind::Appointment, appointment.id(), "status", "completed")
        .await
        .expect("patch failed");

    let patched = store
        .find_by_id::<Appointment>(appointment.id())
        .await
        .expect("lookup failed")
        .expect("record missing");

    assert_eq!(patched.status, "completed");
    let mut expected = appointment.clone();
    expected.status = "completed".to_string();
    assert_eq!(patched, expected);
}

#[tokio::test]
async fn test_set_field_missing_identity_is_not_found() {
    let store = MemoryStore::new();
    let err = store
        .set_field(EntityKind::Bill, "no-such-id", "payment_status", "paid")
        .await
        .expect_err("expected not-found");
    assert_eq!(err.to_string(), "Bill not found");
}

#[tokio::test]
async fn test_find_by_field_filters_by_patient() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let for_p1: MedicalRecord = minter.mint(record_input("p1"));
    let for_p2: MedicalRecord = minter.mint(record_input("p2"));
    let also_p1: MedicalRecord = minter.mint(record_input("p1"));
    store.insert(&for_p1).await.unwrap();
    store.insert(&for_p2).await.unwrap();
    store.insert(&also_p1).await.unwrap();

    let matched = store
        .find_by_field::<MedicalRecord>("patient_id", "p1")
        .await
        .expect("scan failed");

    let ids: Vec<&str> = matched.iter().map(Record::id).collect();
    assert_eq!(ids, vec![for_p1.id(), also_p1.id()]);
}

#[tokio::test]
async fn test_full_scans_are_capped_but_counts_are_not() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    for i in 0..=SCAN_LIMIT {
        let patient: Patient = minter.mint(patient_input(&format!("Patient {i}")));
        store.insert(&patient).await.expect("insert failed");
    }

    let all = store.find_all::<Patient>().await.expect("scan failed");
    assert_eq!(all.len(), SCAN_LIMIT);

    let matched = store
        .find_by_field::<Patient>("gender", "F")
        .await
        .expect("scan failed");
    assert_eq!(matched.len(), SCAN_LIMIT);

    assert_eq!(
        store.count(EntityKind::Patient).await.unwrap(),
        (SCAN_LIMIT + 1) as u64
    );
}

#[tokio::test]
async fn test_counts_by_kind_and_field() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    for status in ["pending", "paid", "pending"] {
        let bill: Bill = minter.mint(bill_input("p1", status));
        store.insert(&bill).await.unwrap();
    }

    assert_eq!(store.count(EntityKind::Bill).await.unwrap(), 3);
    assert_eq!(
        store
            .count_by_field(EntityKind::Bill, "payment_status", "pending")
            .await
            .unwrap(),
        2
    );
    assert_eq!(store.count(EntityKind::Doctor).await.unwrap(), 0);
}

#[tokio::test]
async fn test_deleting_patient_does_not_cascade_to_appointments() {
    let store = MemoryStore::new();
    let minter = RecordMinter::default();

    let patient = seed_patient(&store, &minter, "Jane Doe").await;
    let appointment: Appointment = minter.mint(appointment_input(patient.id()));
    store.insert(&appointment).await.unwrap();

    store.delete::<Patient>(patient.id()).await.unwrap();

    let still_there = store
        .find_by_id::<Appointment>(appointment.id())
        .await
        .unwrap()
        .expect("appointment should survive patient deletion");
    assert_eq!(still_there.patient_id, patient.id());
}
