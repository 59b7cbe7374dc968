//! Stable identifiers for periods
//!
//! A period's identifier is a name-based UUID computed from its canonical
//! interval text, so the same calendar interval gets the same identifier in
//! every request, locale and process. Downstream consumers join periods of
//! different granularities on these identifiers.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;
use std::str::FromStr;
use uuid::{Builder, Uuid};

use crate::temporal::CalendarInterval;

/// Deterministic identifier of a calendar interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StableId(Uuid);

impl StableId {
    /// Derives the identifier of a calendar interval
    ///
    /// The hashed name is the JSON string literal of the canonical interval
    /// text, quotes included.
    pub fn for_interval(interval: &CalendarInterval) -> Self {
        // Canonical text holds only digits, slashes, spaces and a dash, so
        // quoting it is all the JSON encoding it needs
        Self::from_name(&format!("\"{}\"", interval.canonical_text()))
    }

    /// Name-based UUID: SHA-1 over the raw name bytes, no namespace
    pub fn from_name(name: &str) -> Self {
        let digest = Sha1::digest(name.as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self(Builder::from_sha1_bytes(bytes).into_uuid())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StableId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn interval(start: (i32, u32, u32), last: (i32, u32, u32)) -> CalendarInterval {
        CalendarInterval::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(last.0, last.1, last.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_same_interval_same_id() {
        let a = interval((2024, 1, 1), (2024, 3, 31));
        let b = interval((2024, 1, 1), (2024, 3, 31));
        assert_eq!(a.stable_id(), b.stable_id());
    }

    #[test]
    fn test_different_intervals_differ() {
        let quarter = interval((2024, 1, 1), (2024, 3, 31));
        let month = interval((2024, 1, 1), (2024, 1, 31));
        assert_ne!(quarter.stable_id(), month.stable_id());
    }

    #[test]
    fn test_id_has_name_based_layout() {
        let id = interval((2024, 1, 1), (2024, 12, 31)).stable_id();
        assert_eq!(id.as_uuid().get_version_num(), 5);
        assert_eq!(id.as_uuid().get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_round_trip_through_text() {
        let id = interval((2023, 12, 25), (2023, 12, 31)).stable_id();
        let parsed: StableId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
