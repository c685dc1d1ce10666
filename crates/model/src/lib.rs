//! # medibase-model - Entity Registry
//!
//! This crate defines the seven record kinds managed by the Medibase hospital
//! records backend, together with the machinery for turning client-supplied
//! creation payloads into fully populated stored records.
//!
//! ## Shapes
//!
//! Every entity kind comes in two shapes:
//!
//! - A **creation shape** (e.g. [`PatientCreate`]) holding only the fields a
//!   client may supply. Unknown fields in a payload are ignored, not rejected.
//! - A **stored shape** (e.g. [`Patient`]) extending the creation shape with a
//!   generated identity and a creation timestamp, plus any documented
//!   defaults (Appointment `status` = `"scheduled"`, Bill `payment_status` =
//!   `"pending"`, optional text fields = `""`).
//!
//! The [`Record`] trait ties a stored shape to its creation shape and is the
//! seam the persistence layer is generic over.
//!
//! ## Minting
//!
//! Identity and timestamp generation are injected capabilities: the
//! [`RecordMinter`] combines an [`IdGenerator`] and a [`Clock`], so production
//! code uses UUIDv4 identities and the system clock while tests can inject
//! fixed implementations for deterministic output.
//!
//! ```rust
//! use medibase_model::{Patient, PatientCreate, RecordMinter};
//!
//! let minter = RecordMinter::default();
//! let patient: Patient = minter.mint(PatientCreate {
//!     name: "Jane Doe".to_string(),
//!     age: 34,
//!     gender: "F".to_string(),
//!     contact: "555-0101".to_string(),
//!     address: "12 Elm St".to_string(),
//!     blood_group: "O+".to_string(),
//!     medical_history: String::new(),
//! });
//! assert!(!patient.id.is_empty());
//! ```

#![warn(missing_docs)]

pub mod kind;
pub mod mint;
pub mod records;

pub use kind::EntityKind;
pub use mint::{Clock, IdGenerator, RecordMinter, SystemClock, UuidGenerator};
pub use records::{
    Appointment, AppointmentCreate, Bill, BillCreate, Doctor, DoctorCreate, MedicalRecord,
    MedicalRecordCreate, Medicine, MedicineCreate, Patient, PatientCreate, Record, Staff,
    StaffCreate,
};
