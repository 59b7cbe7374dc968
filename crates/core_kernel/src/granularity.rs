//! Calendar granularities and their arithmetic
//!
//! Every granularity partitions the calendar into consecutive intervals:
//! - Day: a single date
//! - Week: Monday through Sunday (ISO weeks)
//! - Month, Quarter, Year: the usual Gregorian cycles

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::temporal::{CalendarInterval, TemporalError};

/// A period size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Error returned when a granularity name is not recognized
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown period type: {0}")]
pub struct UnknownGranularity(pub String);

impl Granularity {
    /// All granularities, finest first
    pub const ALL: [Granularity; 5] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];

    /// Canonical name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Quarter => "Quarter",
            Granularity::Year => "Year",
        }
    }

    /// Plural label used in choice lists
    pub fn plural(&self) -> &'static str {
        match self {
            Granularity::Day => "Days",
            Granularity::Week => "Weeks",
            Granularity::Month => "Months",
            Granularity::Quarter => "Quarters",
            Granularity::Year => "Years",
        }
    }

    /// Lower-case unit key, used to look up localized messages
    pub fn unit_key(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        }
    }

    /// First date of the interval containing `date`
    pub fn start_of(&self, date: NaiveDate) -> Result<NaiveDate, TemporalError> {
        let start = match self {
            Granularity::Day => Some(date),
            Granularity::Week => date.checked_sub_days(Days::new(u64::from(
                date.weekday().num_days_from_monday(),
            ))),
            Granularity::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
            Granularity::Quarter => {
                let first_month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), first_month, 1)
            }
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
        };
        start.ok_or_else(|| out_of_range(date))
    }

    /// Moves `date` forward by one unit of this granularity
    ///
    /// Month-based units clamp to the end of shorter months, so
    /// 2023-12-31 plus one month is 2024-01-31 and plus one quarter is
    /// 2024-03-31.
    pub fn advance(&self, date: NaiveDate) -> Result<NaiveDate, TemporalError> {
        let next = match self {
            Granularity::Day => date.checked_add_days(Days::new(1)),
            Granularity::Week => date.checked_add_days(Days::new(7)),
            Granularity::Month => date.checked_add_months(Months::new(1)),
            Granularity::Quarter => date.checked_add_months(Months::new(3)),
            Granularity::Year => date.checked_add_months(Months::new(12)),
        };
        next.ok_or_else(|| out_of_range(date))
    }

    /// The interval of this granularity that contains `date`
    pub fn interval_containing(&self, date: NaiveDate) -> Result<CalendarInterval, TemporalError> {
        let start = self.start_of(date)?;
        let next = self.advance(start)?;
        let last = next.pred_opt().ok_or_else(|| out_of_range(next))?;
        CalendarInterval::new(start, last)
    }

    /// Signed number of whole units from `from` to `to`
    ///
    /// Both dates are expected to be interval starts of this granularity.
    pub fn units_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        let months = || {
            i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
        };
        match self {
            Granularity::Day => (to - from).num_days(),
            Granularity::Week => (to - from).num_days() / 7,
            Granularity::Month => months(),
            Granularity::Quarter => months() / 3,
            Granularity::Year => i64::from(to.year() - from.year()),
        }
    }
}

fn out_of_range(date: NaiveDate) -> TemporalError {
    TemporalError::DateOutOfRange(date.to_string())
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = UnknownGranularity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Granularity::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownGranularity(s.to_string()))
    }
}

impl Serialize for Granularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2023-01-01 is a Sunday
        assert_eq!(Granularity::Week.start_of(date(2023, 1, 1)).unwrap(), date(2022, 12, 26));
        assert_eq!(Granularity::Week.start_of(date(2023, 1, 2)).unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn test_quarter_start() {
        assert_eq!(Granularity::Quarter.start_of(date(2024, 8, 17)).unwrap(), date(2024, 7, 1));
        assert_eq!(Granularity::Quarter.start_of(date(2024, 12, 31)).unwrap(), date(2024, 10, 1));
    }

    #[test]
    fn test_interval_containing_handles_leap_february() {
        let feb = Granularity::Month.interval_containing(date(2024, 2, 10)).unwrap();
        assert_eq!(feb.start, date(2024, 2, 1));
        assert_eq!(feb.last, date(2024, 2, 29));
    }

    #[test]
    fn test_advance_clamps_month_end() {
        assert_eq!(Granularity::Month.advance(date(2023, 12, 31)).unwrap(), date(2024, 1, 31));
        assert_eq!(Granularity::Quarter.advance(date(2023, 12, 31)).unwrap(), date(2024, 3, 31));
    }

    #[test]
    fn test_units_between() {
        assert_eq!(Granularity::Day.units_between(date(2024, 1, 10), date(2024, 1, 1)), -9);
        assert_eq!(Granularity::Week.units_between(date(2024, 1, 1), date(2024, 1, 15)), 2);
        assert_eq!(Granularity::Month.units_between(date(2023, 11, 1), date(2024, 2, 1)), 3);
        assert_eq!(Granularity::Quarter.units_between(date(2024, 10, 1), date(2024, 1, 1)), -3);
        assert_eq!(Granularity::Year.units_between(date(2020, 1, 1), date(2024, 1, 1)), 4);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("quarter".parse::<Granularity>(), Ok(Granularity::Quarter));
        assert_eq!(" Year ".parse::<Granularity>(), Ok(Granularity::Year));
        assert_eq!(
            "Hour".parse::<Granularity>(),
            Err(UnknownGranularity("Hour".to_string()))
        );
    }
}
