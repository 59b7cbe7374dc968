//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! period sync test suite.
//!
//! # Modules
//!
//! - `fixtures`: Shared reference data, pinned clocks and calendar dates
//! - `builders`: Builder for period filters
//! - `assertions`: Custom assertion helpers for period records
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
