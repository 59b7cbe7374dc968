//! Period domain errors

use core_kernel::{CoreError, TemporalError, UnknownGranularity};
use thiserror::Error;

/// Errors that can occur while generating periods
///
/// Any of these aborts the whole request; no partial result is returned.
#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("Only this database can be synchronized")]
    UnsupportedRequestType(Option<String>),

    #[error(transparent)]
    UnknownGranularity(#[from] UnknownGranularity),

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
