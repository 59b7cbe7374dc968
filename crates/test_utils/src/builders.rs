//! Test Data Builders
//!
//! Provides a builder for period filters with sensible defaults, so tests
//! only spell out the fields they care about.

use domain_period::{PeriodFilter, SyncRequest};
use serde_json::{json, Value};

use crate::fixtures::ZoneFixtures;

/// Builder for constructing period filters
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    filter: PeriodFilter,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBuilder {
    /// Creates a builder for 2024, one year, UTC, English, all types
    pub fn new() -> Self {
        Self {
            filter: PeriodFilter {
                from: Some(json!(2024)),
                num_years: Some(json!(1)),
                timezone: Some(ZoneFixtures::utc().to_string()),
                locale: Some("en".to_string()),
                types: None,
            },
        }
    }

    /// Sets the first year
    pub fn from_year(mut self, year: i32) -> Self {
        self.filter.from = Some(json!(year));
        self
    }

    /// Sets `from` to an arbitrary JSON value
    pub fn from_value(mut self, value: Value) -> Self {
        self.filter.from = Some(value);
        self
    }

    /// Sets the number of years
    pub fn num_years(mut self, count: i64) -> Self {
        self.filter.num_years = Some(json!(count));
        self
    }

    pub fn timezone(mut self, name: impl Into<String>) -> Self {
        self.filter.timezone = Some(name.into());
        self
    }

    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.filter.locale = Some(tag.into());
        self
    }

    /// Sets the requested granularity names
    pub fn types(mut self, names: &[&str]) -> Self {
        self.filter.types = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Removes the `types` field
    pub fn all_types(mut self) -> Self {
        self.filter.types = None;
        self
    }

    pub fn build(self) -> PeriodFilter {
        self.filter
    }

    /// Wraps the filter in a period synchronization request
    pub fn request(self) -> SyncRequest {
        SyncRequest::period(self.filter)
    }

    /// The request as the consumer would send it
    pub fn request_json(self) -> Value {
        let mut filter = serde_json::Map::new();
        let PeriodFilter { from, num_years, timezone, locale, types } = self.filter;
        if let Some(from) = from {
            filter.insert("from".to_string(), from);
        }
        if let Some(num_years) = num_years {
            filter.insert("numYears".to_string(), num_years);
        }
        if let Some(timezone) = timezone {
            filter.insert("timezone".to_string(), json!(timezone));
        }
        if let Some(locale) = locale {
            filter.insert("locale".to_string(), json!(locale));
        }
        if let Some(types) = types {
            filter.insert("types".to_string(), json!(types));
        }
        json!({ "requestedType": "period", "filter": filter })
    }
}
