//! Stored and creation shapes for every entity kind.
//!
//! Each kind declares a creation struct (the allow-list of client-suppliable
//! fields) and a stored struct (creation fields plus generated identity,
//! creation timestamp, and documented defaults). The structs are the wire
//! format: field names here are exactly the field names persisted and served.
//!
//! None of the structs opt into `deny_unknown_fields`, so unknown fields in a
//! client payload are ignored rather than rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;

/// Ties a stored shape to its creation shape.
///
/// The persistence and REST layers are generic over this trait: a single set
/// of repository operations and HTTP handlers serves every kind, instantiated
/// once per entity in the route table.
pub trait Record:
    Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + Unpin + 'static
{
    /// The kind this record belongs to.
    const KIND: EntityKind;

    /// The subset of fields a client may supply when creating a record.
    type Create: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Assembles a stored record from client input plus generated metadata.
    ///
    /// `id` and `created_at` are assigned exactly once here and are never
    /// touched again; fields absent from the creation shape receive their
    /// documented defaults.
    fn from_parts(input: Self::Create, id: String, created_at: String) -> Self;

    /// The record's identity, the sole lookup key.
    fn id(&self) -> &str;
}

fn pending() -> String {
    "pending".to_string()
}

// ---------- Patient ----------

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Generated identity.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Gender.
    pub gender: String,
    /// Contact phone number.
    pub contact: String,
    /// Postal address.
    pub address: String,
    /// Blood group.
    pub blood_group: String,
    /// Free-text medical history; empty when not supplied.
    #[serde(default)]
    pub medical_history: String,
    /// Registration instant, ISO 8601 UTC, set once at creation.
    pub registration_date: String,
}

/// Client-suppliable fields for creating a [`Patient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientCreate {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Gender.
    pub gender: String,
    /// Contact phone number.
    pub contact: String,
    /// Postal address.
    pub address: String,
    /// Blood group.
    pub blood_group: String,
    /// Free-text medical history; defaults to empty.
    #[serde(default)]
    pub medical_history: String,
}

impl Record for Patient {
    const KIND: EntityKind = EntityKind::Patient;
    type Create = PatientCreate;

    fn from_parts(input: PatientCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            gender: input.gender,
            contact: input.contact,
            address: input.address,
            blood_group: input.blood_group,
            medical_history: input.medical_history,
            registration_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Doctor ----------

/// A doctor on staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Generated identity.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Medical specialization.
    pub specialization: String,
    /// Contact phone number.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Department.
    pub department: String,
    /// Availability description.
    pub availability: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub created_date: String,
}

/// Client-suppliable fields for creating a [`Doctor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorCreate {
    /// Full name.
    pub name: String,
    /// Medical specialization.
    pub specialization: String,
    /// Contact phone number.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Department.
    pub department: String,
    /// Availability description.
    pub availability: String,
}

impl Record for Doctor {
    const KIND: EntityKind = EntityKind::Doctor;
    type Create = DoctorCreate;

    fn from_parts(input: DoctorCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            specialization: input.specialization,
            contact: input.contact,
            email: input.email,
            department: input.department,
            availability: input.availability,
            created_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Staff ----------

/// A non-doctor staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Generated identity.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job role.
    pub role: String,
    /// Contact phone number.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Department.
    pub department: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub created_date: String,
}

/// Client-suppliable fields for creating a [`Staff`] member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffCreate {
    /// Full name.
    pub name: String,
    /// Job role.
    pub role: String,
    /// Contact phone number.
    pub contact: String,
    /// Email address.
    pub email: String,
    /// Department.
    pub department: String,
}

impl Record for Staff {
    const KIND: EntityKind = EntityKind::Staff;
    type Create = StaffCreate;

    fn from_parts(input: StaffCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            role: input.role,
            contact: input.contact,
            email: input.email,
            department: input.department,
            created_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Appointment ----------

/// A scheduled appointment.
///
/// `patient_name` and `doctor_name` are snapshots copied at creation time;
/// they do not track later changes to the source records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Generated identity.
    pub id: String,
    /// Identity of the patient, stored as an opaque string.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the doctor, stored as an opaque string.
    pub doctor_id: String,
    /// Doctor name snapshot.
    pub doctor_name: String,
    /// Appointment date.
    pub date: String,
    /// Appointment time.
    pub time: String,
    /// Free-form status string; `"scheduled"` at creation.
    pub status: String,
    /// Reason for the visit.
    pub reason: String,
    /// Free-text notes; empty when not supplied.
    #[serde(default)]
    pub notes: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub created_date: String,
}

/// Client-suppliable fields for creating an [`Appointment`].
///
/// `status` is intentionally absent: it always starts as `"scheduled"` and is
/// only changed through the dedicated status patch, so a full update never
/// touches it either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreate {
    /// Identity of the patient.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the doctor.
    pub doctor_id: String,
    /// Doctor name snapshot.
    pub doctor_name: String,
    /// Appointment date.
    pub date: String,
    /// Appointment time.
    pub time: String,
    /// Reason for the visit.
    pub reason: String,
    /// Free-text notes; defaults to empty.
    #[serde(default)]
    pub notes: String,
}

impl Record for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;
    type Create = AppointmentCreate;

    fn from_parts(input: AppointmentCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            patient_id: input.patient_id,
            patient_name: input.patient_name,
            doctor_id: input.doctor_id,
            doctor_name: input.doctor_name,
            date: input.date,
            time: input.time,
            status: "scheduled".to_string(),
            reason: input.reason,
            notes: input.notes,
            created_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Medical record ----------

/// An immutable medical record entry. No update or delete is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// Generated identity.
    pub id: String,
    /// Identity of the patient, stored as an opaque string.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the doctor, stored as an opaque string.
    pub doctor_id: String,
    /// Doctor name snapshot.
    pub doctor_name: String,
    /// Consultation date.
    pub date: String,
    /// Diagnosis.
    pub diagnosis: String,
    /// Prescriptions issued.
    pub prescriptions: String,
    /// Tests ordered; empty when not supplied.
    #[serde(default)]
    pub tests: String,
    /// Free-text notes; empty when not supplied.
    #[serde(default)]
    pub notes: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub created_date: String,
}

/// Client-suppliable fields for creating a [`MedicalRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecordCreate {
    /// Identity of the patient.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the doctor.
    pub doctor_id: String,
    /// Doctor name snapshot.
    pub doctor_name: String,
    /// Consultation date.
    pub date: String,
    /// Diagnosis.
    pub diagnosis: String,
    /// Prescriptions issued.
    pub prescriptions: String,
    /// Tests ordered; defaults to empty.
    #[serde(default)]
    pub tests: String,
    /// Free-text notes; defaults to empty.
    #[serde(default)]
    pub notes: String,
}

impl Record for MedicalRecord {
    const KIND: EntityKind = EntityKind::MedicalRecord;
    type Create = MedicalRecordCreate;

    fn from_parts(input: MedicalRecordCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            patient_id: input.patient_id,
            patient_name: input.patient_name,
            doctor_id: input.doctor_id,
            doctor_name: input.doctor_name,
            date: input.date,
            diagnosis: input.diagnosis,
            prescriptions: input.prescriptions,
            tests: input.tests,
            notes: input.notes,
            created_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Bill ----------

/// A bill issued to a patient.
///
/// The creation timestamp field is named `date` for this kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Generated identity.
    pub id: String,
    /// Identity of the patient, stored as an opaque string.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the related appointment; empty when not supplied.
    #[serde(default)]
    pub appointment_id: String,
    /// Billed items description.
    pub items: String,
    /// Total amount billed.
    pub total_amount: f64,
    /// Free-form payment status string; `"pending"` unless supplied.
    #[serde(default = "pending")]
    pub payment_status: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub date: String,
}

/// Client-suppliable fields for creating a [`Bill`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillCreate {
    /// Identity of the patient.
    pub patient_id: String,
    /// Patient name snapshot.
    pub patient_name: String,
    /// Identity of the related appointment; defaults to empty.
    #[serde(default)]
    pub appointment_id: String,
    /// Billed items description.
    pub items: String,
    /// Total amount billed.
    pub total_amount: f64,
    /// Payment status; defaults to `"pending"`.
    #[serde(default = "pending")]
    pub payment_status: String,
}

impl Record for Bill {
    const KIND: EntityKind = EntityKind::Bill;
    type Create = BillCreate;

    fn from_parts(input: BillCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            patient_id: input.patient_id,
            patient_name: input.patient_name,
            appointment_id: input.appointment_id,
            items: input.items,
            total_amount: input.total_amount,
            payment_status: input.payment_status,
            date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// ---------- Medicine ----------

/// A medicine inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    /// Generated identity.
    pub id: String,
    /// Medicine name.
    pub name: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Expiry date.
    pub expiry_date: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Category.
    pub category: String,
    /// Creation instant, ISO 8601 UTC, set once at creation.
    pub created_date: String,
}

/// Client-suppliable fields for creating a [`Medicine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineCreate {
    /// Medicine name.
    pub name: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Expiry date.
    pub expiry_date: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Category.
    pub category: String,
}

impl Record for Medicine {
    const KIND: EntityKind = EntityKind::Medicine;
    type Create = MedicineCreate;

    fn from_parts(input: MedicineCreate, id: String, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            expiry_date: input.expiry_date,
            manufacturer: input.manufacturer,
            category: input.category,
            created_date: created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_empty() {
        let input: PatientCreate = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "age": 34,
            "gender": "F",
            "contact": "555-0101",
            "address": "12 Elm St",
            "blood_group": "O+"
        }))
        .unwrap();
        assert_eq!(input.medical_history, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let input: StaffCreate = serde_json::from_value(serde_json::json!({
            "name": "Sam Orderly",
            "role": "Nurse",
            "contact": "555-0102",
            "email": "sam@example.com",
            "department": "ER",
            "favorite_color": "green"
        }))
        .unwrap();
        assert_eq!(input.name, "Sam Orderly");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result: Result<DoctorCreate, _> = serde_json::from_value(serde_json::json!({
            "name": "Dr. Smith"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_appointment_status_defaults_to_scheduled() {
        let input: AppointmentCreate = serde_json::from_value(serde_json::json!({
            "patient_id": "p1",
            "patient_name": "Jane Doe",
            "doctor_id": "d1",
            "doctor_name": "Dr. Smith",
            "date": "2024-01-10",
            "time": "09:00",
            "reason": "checkup"
        }))
        .unwrap();
        let appointment =
            Appointment::from_parts(input, "a1".to_string(), "2024-01-01T00:00:00+00:00".to_string());
        assert_eq!(appointment.status, "scheduled");
        assert_eq!(appointment.notes, "");
    }

    #[test]
    fn test_bill_payment_status_defaults_to_pending() {
        let input: BillCreate = serde_json::from_value(serde_json::json!({
            "patient_id": "p1",
            "patient_name": "Jane Doe",
            "items": "Consultation",
            "total_amount": 120.5
        }))
        .unwrap();
        assert_eq!(input.payment_status, "pending");
        assert_eq!(input.appointment_id, "");

        let bill = Bill::from_parts(input, "b1".to_string(), "2024-01-01T00:00:00+00:00".to_string());
        assert_eq!(bill.payment_status, "pending");
        assert_eq!(bill.date, "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_stored_shape_roundtrips_through_json() {
        let medicine = Medicine::from_parts(
            MedicineCreate {
                name: "Ibuprofen".to_string(),
                quantity: 40,
                price: 3.25,
                expiry_date: "2027-06-01".to_string(),
                manufacturer: "Acme Pharma".to_string(),
                category: "Analgesic".to_string(),
            },
            "m1".to_string(),
            "2024-01-01T00:00:00+00:00".to_string(),
        );
        let value = serde_json::to_value(&medicine).unwrap();
        assert_eq!(value["id"], "m1");
        let back: Medicine = serde_json::from_value(value).unwrap();
        assert_eq!(back, medicine);
    }
}
