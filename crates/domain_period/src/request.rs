//! Synchronization requests
//!
//! The consumer sends loosely typed filters: `from` may be a number or a
//! string, and any field may be missing. Values are kept as received and
//! interpreted by the resolvers, which apply the documented defaults instead
//! of rejecting the request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PeriodError;

/// The only dataset this service can synchronize
pub const PERIOD_REQUEST_TYPE: &str = "period";

/// Filter of a period synchronization request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodFilter {
    /// First year, as a number or numeric string
    pub from: Option<Value>,
    /// Number of years to cover
    pub num_years: Option<Value>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Locale tag such as `en` or `de-AT`
    pub locale: Option<String>,
    /// Requested granularity names
    pub types: Option<Vec<String>>,
}

/// Body of a synchronizer data request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub requested_type: Option<String>,
    #[serde(default)]
    pub filter: PeriodFilter,
}

impl SyncRequest {
    pub fn period(filter: PeriodFilter) -> Self {
        Self {
            requested_type: Some(PERIOD_REQUEST_TYPE.to_string()),
            filter,
        }
    }

    /// Returns the filter if this request targets the period dataset
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::UnsupportedRequestType` for any other dataset.
    pub fn into_period_filter(self) -> Result<PeriodFilter, PeriodError> {
        match self.requested_type.as_deref() {
            Some(PERIOD_REQUEST_TYPE) => Ok(self.filter),
            _ => Err(PeriodError::UnsupportedRequestType(self.requested_type)),
        }
    }
}
