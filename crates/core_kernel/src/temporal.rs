//! Timezone-aware calendar handling
//!
//! Periods are identified by calendar dates, never by instants, so that the
//! same period carries the same identity whichever timezone it is viewed in.
//! The timezone only matters for two questions:
//! - Which calendar date is "today" for the caller
//! - Where the absolute midpoint of a period falls on the local calendar

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use std::fmt;

use crate::identifiers::StableId;

/// Format used for canonical interval text (`yyyy/MM/dd`)
const CANONICAL_DATE_FORMAT: &str = "%Y/%m/%d";

/// Separator between the two dates of a canonical interval
const CANONICAL_SEPARATOR: &str = " \u{2013} ";

/// Timezone wrapper for the caller's view of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    /// Parses an IANA zone name such as `Europe/Amsterdam`, ignoring case
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str_insensitive(name.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// The local calendar date of the given instant
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.to_local(now).date_naive()
    }

    /// Gets the first instant of the given local date
    ///
    /// When local midnight does not exist (a DST gap, or a zone that skipped
    /// the whole date) the day starts at the first instant after the gap.
    pub fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Tz>, TemporalError> {
        let midnight = date.and_time(NaiveTime::MIN);
        if let Some(start) = midnight.and_local_timezone(self.0).earliest() {
            return Ok(start);
        }

        // Read midnight with the offset in effect before the gap
        let out_of_range = || TemporalError::DateOutOfRange(date.to_string());
        let before = midnight.checked_sub_days(Days::new(1)).ok_or_else(out_of_range)?;
        let offset = self.0.offset_from_utc_datetime(&before).fix();
        let utc = midnight
            .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
            .ok_or_else(out_of_range)?;
        Ok(self.0.from_utc_datetime(&utc))
    }

    /// Local calendar date of the absolute midpoint of an interval
    ///
    /// The interval runs from the first instant of its start date to the
    /// last millisecond of its last date.
    pub fn midpoint(&self, interval: &CalendarInterval) -> Result<NaiveDate, TemporalError> {
        let start = self.start_of_day(interval.start)?;
        let end = self.start_of_day(interval.end_exclusive()?)? - TimeDelta::milliseconds(1);
        let mid = start + (end - start) / 2;
        Ok(mid.date_naive())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Date out of supported range: {0}")]
    DateOutOfRange(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// A closed range of calendar dates, the canonical form of a period
///
/// `start` and `last` are both inclusive; the exclusive end used on the
/// wire is `last + 1 day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarInterval {
    pub start: NaiveDate,
    pub last: NaiveDate,
}

impl CalendarInterval {
    pub fn new(start: NaiveDate, last: NaiveDate) -> Result<Self, TemporalError> {
        if start > last {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: last.to_string(),
            });
        }
        Ok(Self { start, last })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.last
    }

    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.last - self.start).num_days() + 1
    }

    /// The day after the last day of the interval
    pub fn end_exclusive(&self) -> Result<NaiveDate, TemporalError> {
        self.last
            .succ_opt()
            .ok_or_else(|| TemporalError::DateOutOfRange(self.last.to_string()))
    }

    /// Locale- and timezone-independent text identifying this interval
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use core_kernel::CalendarInterval;
    ///
    /// let march = CalendarInterval::new(
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    /// ).unwrap();
    /// assert_eq!(march.canonical_text(), "2024/03/01 \u{2013} 2024/03/31");
    /// ```
    pub fn canonical_text(&self) -> String {
        format!(
            "{}{}{}",
            self.start.format(CANONICAL_DATE_FORMAT),
            CANONICAL_SEPARATOR,
            self.last.format(CANONICAL_DATE_FORMAT),
        )
    }

    /// Deterministic identifier of this interval
    pub fn stable_id(&self) -> StableId {
        StableId::for_interval(self)
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.last)
    }
}
