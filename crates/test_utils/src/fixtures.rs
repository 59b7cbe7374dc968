//! Pre-built Test Fixtures
//!
//! Reference data is parsed once per test binary and shared, the same way
//! the server shares it between requests.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{FixedClock, LocaleCatalog};
use domain_period::PeriodGenerator;
use once_cell::sync::Lazy;

static CATALOG: Lazy<Arc<LocaleCatalog>> = Lazy::new(|| {
    Arc::new(LocaleCatalog::load().expect("embedded locale resources must parse"))
});

/// Fixture for reference data
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    /// The shared locale catalog
    pub fn catalog() -> Arc<LocaleCatalog> {
        Arc::clone(&CATALOG)
    }

    /// A generator whose clock is frozen at `now`
    pub fn generator_at(now: DateTime<Utc>) -> PeriodGenerator {
        PeriodGenerator::new(Self::catalog(), Arc::new(FixedClock::at(now)))
    }

    /// A generator frozen at [`ClockFixtures::mid_2024`]
    pub fn generator() -> PeriodGenerator {
        Self::generator_at(ClockFixtures::mid_2024())
    }
}

/// Fixture for pinned instants
pub struct ClockFixtures;

impl ClockFixtures {
    /// Saturday 2024-06-15, noon UTC
    pub fn mid_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Monday 2024-01-01, 02:00 UTC (still 2023 in the Americas)
    pub fn new_year_2024_early() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap()
    }

    /// Tuesday 2030-10-01, midnight UTC
    pub fn far_future() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 10, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Leap day used in February and quarter edge cases
    pub fn leap_day_2024() -> NaiveDate {
        Self::ymd(2024, 2, 29)
    }
}

/// Fixture for timezone names
pub struct ZoneFixtures;

impl ZoneFixtures {
    pub fn utc() -> &'static str {
        "UTC"
    }

    /// West of UTC; its calendar lags UTC around midnight
    pub fn new_york() -> &'static str {
        "America/New_York"
    }

    /// East of UTC, far enough to change the date
    pub fn auckland() -> &'static str {
        "Pacific/Auckland"
    }

    /// A zone whose DST change skips midnight
    pub fn sao_paulo() -> &'static str {
        "America/Sao_Paulo"
    }
}
