//! Synchronizer DTOs

use domain_period::PeriodRecord;
use serde::{Deserialize, Serialize};

/// Response of the data endpoint
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub items: Vec<PeriodRecord>,
}

/// Request of the datalist endpoint
///
/// The consumer also sends `types`, `account` and `dependsOn`; none of them
/// change the lists offered here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatalistRequest {
    pub field: Option<String>,
}

/// One choice of a datalist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceItem {
    pub title: String,
    pub value: String,
}

impl ChoiceItem {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Response of the datalist endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatalistResponse {
    pub items: Vec<ChoiceItem>,
}

/// Response of the validate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub name: String,
}
