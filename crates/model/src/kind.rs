//! Entity kind enumeration.
//!
//! [`EntityKind`] names the seven record types the backend manages and maps
//! each one to its storage collection and its human-readable name (used in
//! not-found messages).

use std::fmt;

/// The seven record kinds managed by the backend.
///
/// Each kind owns one logical collection in the document store. Records of
/// different kinds never reference each other beyond opaque snapshot strings,
/// so the kinds are fully independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A registered patient.
    Patient,
    /// A doctor on staff.
    Doctor,
    /// A non-doctor staff member.
    Staff,
    /// A scheduled appointment between a patient and a doctor.
    Appointment,
    /// An immutable medical record entry.
    MedicalRecord,
    /// A bill issued to a patient.
    Bill,
    /// A medicine inventory entry.
    Medicine,
}

impl EntityKind {
    /// All kinds, in registry order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Patient,
        EntityKind::Doctor,
        EntityKind::Staff,
        EntityKind::Appointment,
        EntityKind::MedicalRecord,
        EntityKind::Bill,
        EntityKind::Medicine,
    ];

    /// Returns the name of the collection holding records of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Doctor => "doctors",
            EntityKind::Staff => "staff",
            EntityKind::Appointment => "appointments",
            EntityKind::MedicalRecord => "medical_records",
            EntityKind::Bill => "bills",
            EntityKind::Medicine => "medicines",
        }
    }

    /// Returns the human-readable kind name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Patient => "Patient",
            EntityKind::Doctor => "Doctor",
            EntityKind::Staff => "Staff",
            EntityKind::Appointment => "Appointment",
            EntityKind::MedicalRecord => "Medical record",
            EntityKind::Bill => "Bill",
            EntityKind::Medicine => "Medicine",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::ALL {
            assert!(seen.insert(kind.collection()), "{kind} collection reused");
        }
    }

    #[test]
    fn test_display_matches_display_name() {
        assert_eq!(EntityKind::Patient.to_string(), "Patient");
        assert_eq!(EntityKind::MedicalRecord.to_string(), "Medical record");
    }
}
