//! Core Kernel - Foundational types for period generation
//!
//! This crate provides the building blocks used by the period generator and
//! the API layer:
//! - Calendar granularities and their arithmetic
//! - Timezone handling and canonical calendar intervals
//! - Stable, content-derived period identifiers
//! - Locale reference data (relative phrases, localized date names)
//! - A clock port for "now"

pub mod clock;
pub mod error;
pub mod granularity;
pub mod identifiers;
pub mod locale;
pub mod temporal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use granularity::{Granularity, UnknownGranularity};
pub use identifiers::StableId;
pub use locale::{LocaleCatalog, LocaleEntry, ResolvedLocale};
pub use temporal::{CalendarInterval, TemporalError, Timezone};
