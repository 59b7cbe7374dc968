//! Clock port
//!
//! Relative offsets and the default year both depend on "now". The
//! generator reads it through this trait so that the server uses the system
//! clock while tests pin a fixed instant.

use chrono::{DateTime, Datelike, Local, Utc};
use std::fmt;

/// Source of the current instant
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar year on the host's local clock
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
