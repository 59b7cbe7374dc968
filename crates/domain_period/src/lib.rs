//! Period Generation Domain
//!
//! This crate turns a synchronization filter into a flat list of calendar
//! period records (days, weeks, months, quarters, years) for a
//! date-dimension consumer.
//!
//! # Key Concepts
//!
//! - **Year range**: the calendar years covered, from `from` and `numYears`
//! - **Granularity order**: the requested period sizes, finest first
//! - **Walk**: the consecutive intervals of one granularity over the range
//! - **Links**: `is_in` (all coarser containing periods) and `part_of` (the
//!   next coarser period containing the midpoint)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use core_kernel::{LocaleCatalog, SystemClock};
//! use domain_period::{PeriodFilter, PeriodGenerator};
//! use serde_json::json;
//!
//! let generator = PeriodGenerator::new(
//!     Arc::new(LocaleCatalog::load().unwrap()),
//!     Arc::new(SystemClock),
//! );
//! let filter = PeriodFilter {
//!     from: Some(json!(2024)),
//!     types: Some(vec!["Quarter".to_string(), "Year".to_string()]),
//!     ..PeriodFilter::default()
//! };
//!
//! let records = generator.generate(&filter).unwrap();
//! assert_eq!(records.len(), 5);
//! ```

pub mod error;
pub mod format;
pub mod generator;
pub mod links;
pub mod ordering;
pub mod record;
pub mod relative;
pub mod request;
pub mod walker;
pub mod year_range;

pub use error::PeriodError;
pub use format::{label, PeriodLabel};
pub use generator::{FilterDefaults, PeriodGenerator};
pub use ordering::{custom_sort, GranularityOrder};
pub use record::{PeriodDates, PeriodRecord};
pub use relative::RelativePosition;
pub use request::{PeriodFilter, SyncRequest, PERIOD_REQUEST_TYPE};
pub use walker::IntervalWalk;
pub use year_range::YearRange;
