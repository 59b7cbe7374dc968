//! Year range resolution
//!
//! Never fails: unusable input falls back to defaults (current year, one
//! year). Years outside the calendar only surface later, when the range is
//! turned into dates.

use chrono::NaiveDate;
use core_kernel::{Clock, TemporalError};
use serde_json::Value;

/// An inclusive range of calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i64,
    pub end: i64,
}

impl YearRange {
    /// Resolves the `from` / `numYears` filter values
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use core_kernel::FixedClock;
    /// use domain_period::YearRange;
    /// use serde_json::json;
    ///
    /// let clock = FixedClock::at(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap());
    ///
    /// let range = YearRange::resolve(Some(&json!("2020")), Some(&json!(3)), &clock);
    /// assert_eq!((range.start, range.end), (2020, 2022));
    ///
    /// let range = YearRange::resolve(None, Some(&json!("zero")), &clock);
    /// assert_eq!((range.start, range.end), (2026, 2026));
    /// ```
    pub fn resolve(from: Option<&Value>, num_years: Option<&Value>, clock: &dyn Clock) -> Self {
        let start = from
            .and_then(integer_value)
            .unwrap_or_else(|| i64::from(clock.current_year()));
        let count = num_years
            .and_then(integer_value)
            .filter(|n| *n >= 1)
            .unwrap_or(1);

        Self {
            start,
            end: start.saturating_add(count - 1),
        }
    }

    /// Number of years covered
    pub(crate) fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    /// January 1st of the first year
    pub fn first_day(&self) -> Result<NaiveDate, TemporalError> {
        calendar_date(self.start, 1, 1)
    }

    /// December 31st of the last year
    pub fn last_day(&self) -> Result<NaiveDate, TemporalError> {
        calendar_date(self.end, 12, 31)
    }
}

fn calendar_date(year: i64, month: u32, day: u32) -> Result<NaiveDate, TemporalError> {
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(|| TemporalError::DateOutOfRange(format!("year {year}")))
}

/// Integer reading of a loosely typed JSON value
///
/// Numbers are truncated toward zero; strings are read by
/// [`parse_leading_int`]. Anything else has no integer reading.
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Reads the integer at the start of `text`
///
/// Leading whitespace and a sign are allowed; parsing stops at the first
/// non-digit, so `"2024abc"` reads as 2024 and `"abc"` has no value.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::FixedClock;
    use serde_json::json;

    fn clock() -> FixedClock {
        FixedClock::at(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2024"), Some(2024));
        assert_eq!(parse_leading_int("  2024abc"), Some(2024));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_from_defaults_to_current_year() {
        let range = YearRange::resolve(None, None, &clock());
        assert_eq!(range, YearRange { start: 2025, end: 2025 });

        let range = YearRange::resolve(Some(&json!("next")), None, &clock());
        assert_eq!(range.start, 2025);
    }

    #[test]
    fn test_from_accepts_numbers_and_strings() {
        assert_eq!(YearRange::resolve(Some(&json!(2019)), None, &clock()).start, 2019);
        assert_eq!(YearRange::resolve(Some(&json!(2019.9)), None, &clock()).start, 2019);
        assert_eq!(YearRange::resolve(Some(&json!("2019")), None, &clock()).start, 2019);
    }

    #[test]
    fn test_num_years_below_one_defaults_to_one() {
        for value in [json!(0), json!(-4), json!("many"), json!(null), json!(true)] {
            let range = YearRange::resolve(Some(&json!(2020)), Some(&value), &clock());
            assert_eq!(range.len(), 1, "numYears {value}");
        }
    }

    #[test]
    fn test_num_years_extends_range() {
        let range = YearRange::resolve(Some(&json!(2020)), Some(&json!(5)), &clock());
        assert_eq!(range, YearRange { start: 2020, end: 2024 });
        assert_eq!(range.first_day().unwrap(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(range.last_day().unwrap(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_unrepresentable_year_fails_on_dates() {
        let range = YearRange::resolve(Some(&json!(9_999_999)), None, &clock());
        assert!(matches!(range.first_day(), Err(TemporalError::DateOutOfRange(_))));
    }
}
