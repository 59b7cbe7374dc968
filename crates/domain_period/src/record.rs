//! Period records as delivered to the consumer

use chrono::NaiveDate;
use core_kernel::{Granularity, StableId};
use serde::{Serialize, Serializer};

/// Wire format of calendar dates
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One period of one granularity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    #[serde(rename = "type")]
    pub granularity: Granularity,
    pub dates: PeriodDates,
    pub relative: i64,
    pub semantic: String,
    pub number: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dotw: Option<String>,
    /// Absent when a single granularity was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in: Option<Vec<StableId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<StableId>,
    pub id: StableId,
}

/// First day and exclusive end of a period
///
/// Serialized as a JSON document embedded in a string, e.g.
/// `"{\"start\":\"2024-01-01\",\"end\":\"2025-01-01\"}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize)]
struct DatesDocument {
    start: String,
    end: String,
}

impl PeriodDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The embedded JSON document
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&DatesDocument {
            start: self.start.format(WIRE_DATE_FORMAT).to_string(),
            end: self.end.format(WIRE_DATE_FORMAT).to_string(),
        })
    }
}

impl Serialize for PeriodDates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let document = self.to_document().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&document)
    }
}
