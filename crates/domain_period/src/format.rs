//! Display labels per granularity

use chrono::{Datelike, NaiveDate};
use core_kernel::{Granularity, ResolvedLocale};

/// Ordinal, name and weekday of one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodLabel {
    /// Position within the natural parent cycle
    pub number: i32,
    pub name: String,
    /// Weekday name, days only
    pub dotw: Option<String>,
}

/// Labels the period of `granularity` starting on `start`
///
/// | Granularity | number | name |
/// |---|---|---|
/// | Day | day of year | locale short date |
/// | Week | ISO week | `2024-W01` (ISO week year) |
/// | Month | 1–12 | `2024/01 Jan` |
/// | Quarter | 1–4 | `2024Q1` |
/// | Year | the year | `2024` |
pub fn label(granularity: Granularity, start: NaiveDate, locale: &ResolvedLocale<'_>) -> PeriodLabel {
    match granularity {
        Granularity::Day => PeriodLabel {
            number: ordinal_number(start.ordinal()),
            name: locale.short_date(start),
            dotw: Some(locale.weekday(start)),
        },
        Granularity::Week => {
            let week = start.iso_week();
            PeriodLabel {
                number: ordinal_number(week.week()),
                name: format!("{}-W{:02}", week.year(), week.week()),
                dotw: None,
            }
        }
        Granularity::Month => PeriodLabel {
            number: ordinal_number(start.month()),
            name: format!("{} {}", start.format("%Y/%m"), locale.month_short(start)),
            dotw: None,
        },
        Granularity::Quarter => {
            let quarter = quarter_of(start);
            PeriodLabel {
                number: ordinal_number(quarter),
                name: format!("{}Q{}", start.year(), quarter),
                dotw: None,
            }
        }
        Granularity::Year => PeriodLabel {
            number: start.year(),
            name: start.year().to_string(),
            dotw: None,
        },
    }
}

/// Quarter of the year, 1 to 4
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

// Calendar ordinals are at most 366
fn ordinal_number(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
