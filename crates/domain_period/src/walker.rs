//! Interval walking
//!
//! Yields the consecutive intervals of one granularity that cover a date
//! range. The walk starts at the interval containing the range's first day
//! and stops before the first interval whose last day reaches one unit past
//! the range's last day. For a year range this means:
//! - Days, months, quarters and years cover the range exactly
//! - Weeks also include the partial ISO weeks at both edges

use chrono::NaiveDate;
use core_kernel::{CalendarInterval, Granularity, TemporalError};

/// Iterator over the intervals of one granularity
#[derive(Debug, Clone)]
pub struct IntervalWalk {
    granularity: Granularity,
    next: Option<CalendarInterval>,
    boundary: NaiveDate,
    pending_error: Option<TemporalError>,
}

impl IntervalWalk {
    /// Starts a walk over `[range_start, range_end]`
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::DateOutOfRange` when the range touches the
    /// limits of the supported calendar.
    pub fn new(
        granularity: Granularity,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            granularity,
            next: Some(granularity.interval_containing(range_start)?),
            boundary: granularity.advance(range_end)?,
            pending_error: None,
        })
    }
}

impl Iterator for IntervalWalk {
    type Item = Result<CalendarInterval, TemporalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.pending_error.take() {
            return Some(Err(error));
        }

        let current = self.next.take()?;
        if current.last >= self.boundary {
            return None;
        }

        match self
            .granularity
            .advance(current.start)
            .and_then(|start| self.granularity.interval_containing(start))
        {
            Ok(following) => self.next = Some(following),
            Err(error) => self.pending_error = Some(error),
        }

        Some(Ok(current))
    }
}
