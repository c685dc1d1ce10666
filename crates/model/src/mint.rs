//! Identity and timestamp minting.
//!
//! Stored records carry two pieces of generated metadata: a globally unique
//! identity and a creation timestamp. Both are produced exactly once, at
//! creation time, by a [`RecordMinter`]. Generation is behind the
//! [`IdGenerator`] and [`Clock`] traits so tests can substitute fixed values.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::records::Record;

/// Source of new record identities.
pub trait IdGenerator: Send + Sync {
    /// Produces a new, globally unique identity string.
    fn generate(&self) -> String;
}

/// Source of creation timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current UTC instant as an ISO 8601 string.
    fn now(&self) -> String;
}

/// Production identity source: random UUIDv4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Production clock: the system clock, rendered with microsecond precision
/// and a `+00:00` offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

/// Turns creation payloads into stored records.
///
/// The minter is the only place identities and creation timestamps are
/// assigned. Cloning is cheap; the generator and clock are shared.
#[derive(Clone)]
pub struct RecordMinter {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl RecordMinter {
    /// Creates a minter with the given identity and timestamp sources.
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Builds the stored shape for a creation payload.
    pub fn mint<R: Record>(&self, input: R::Create) -> R {
        R::from_parts(input, self.ids.generate(), self.clock.now())
    }
}

impl Default for RecordMinter {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Staff, StaffCreate};

    struct FixedIds(&'static str);

    impl IdGenerator for FixedIds {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    struct FixedClock(&'static str);

    impl Clock for FixedClock {
        fn now(&self) -> String {
            self.0.to_string()
        }
    }

    fn staff_input() -> StaffCreate {
        StaffCreate {
            name: "Sam Orderly".to_string(),
            role: "Nurse".to_string(),
            contact: "555-0102".to_string(),
            email: "sam@example.com".to_string(),
            department: "ER".to_string(),
        }
    }

    #[test]
    fn test_mint_assigns_injected_id_and_timestamp() {
        let minter = RecordMinter::new(
            Arc::new(FixedIds("staff-1")),
            Arc::new(FixedClock("2024-01-01T00:00:00.000000+00:00")),
        );
        let staff: Staff = minter.mint(staff_input());
        assert_eq!(staff.id, "staff-1");
        assert_eq!(staff.created_date, "2024-01-01T00:00:00.000000+00:00");
        assert_eq!(staff.name, "Sam Orderly");
    }

    #[test]
    fn test_default_minter_produces_distinct_ids() {
        let minter = RecordMinter::default();
        let a: Staff = minter.mint(staff_input());
        let b: Staff = minter.mint(staff_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_system_clock_renders_utc_offset() {
        let now = SystemClock.now();
        assert!(now.ends_with("+00:00"), "unexpected timestamp: {now}");
    }
}
