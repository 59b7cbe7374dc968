//! The period generator
//!
//! For each requested granularity, in resolved order, the generator walks
//! every interval of the year range and builds one record per interval.
//! All records are collected in memory and returned together; an error at
//! any point discards everything built so far.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{
    CalendarInterval, Clock, Granularity, LocaleCatalog, ResolvedLocale, Timezone,
};
use tracing::{debug, info, instrument};

use crate::error::PeriodError;
use crate::format::label;
use crate::links::{containing_ids, parent_id};
use crate::ordering::GranularityOrder;
use crate::record::{PeriodDates, PeriodRecord};
use crate::relative::RelativePosition;
use crate::request::PeriodFilter;
use crate::walker::IntervalWalk;
use crate::year_range::YearRange;

/// Values used when the filter leaves timezone or locale out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDefaults {
    pub timezone: String,
    pub locale: String,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            locale: "en".to_string(),
        }
    }
}

/// Builds period records from a filter
///
/// Holds only immutable reference data, so one generator serves all
/// requests.
#[derive(Debug, Clone)]
pub struct PeriodGenerator {
    catalog: Arc<LocaleCatalog>,
    clock: Arc<dyn Clock>,
    defaults: FilterDefaults,
}

/// Per-request state shared by all granularity walks
struct WalkContext<'a> {
    timezone: Timezone,
    locale: ResolvedLocale<'a>,
    order: GranularityOrder,
    today: NaiveDate,
}

impl PeriodGenerator {
    pub fn new(catalog: Arc<LocaleCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            clock,
            defaults: FilterDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: FilterDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &FilterDefaults {
        &self.defaults
    }

    /// Generates all period records for `filter`
    ///
    /// Records are grouped by granularity in resolved order and
    /// chronological within each group.
    ///
    /// # Errors
    ///
    /// - `PeriodError::Temporal` for an unknown timezone or a year outside
    ///   the supported calendar
    /// - `PeriodError::Core` for a malformed locale tag
    /// - `PeriodError::UnknownGranularity` for an unknown type name
    #[instrument(skip_all)]
    pub fn generate(&self, filter: &PeriodFilter) -> Result<Vec<PeriodRecord>, PeriodError> {
        let timezone_name = filter.timezone.as_deref().unwrap_or(&self.defaults.timezone);
        let locale_tag = filter.locale.as_deref().unwrap_or(&self.defaults.locale);

        let timezone = Timezone::parse(timezone_name)?;
        let locale = self.catalog.resolve(locale_tag)?;
        let years = YearRange::resolve(
            filter.from.as_ref(),
            filter.num_years.as_ref(),
            self.clock.as_ref(),
        );
        let order = GranularityOrder::resolve(filter.types.as_deref())?;
        if order.is_empty() {
            debug!("No period types requested");
            return Ok(Vec::new());
        }
        let range_start = years.first_day()?;
        let range_end = years.last_day()?;

        let context = WalkContext {
            timezone,
            locale,
            order,
            today: timezone.today(self.clock.now()),
        };

        debug!(
            timezone = %timezone,
            locale = %context.locale.tag(),
            start_year = years.start,
            end_year = years.end,
            types = ?context.order.as_slice(),
            "Resolved period filter"
        );

        let mut records = Vec::new();
        for (position, granularity) in context.order.iter().enumerate() {
            let before = records.len();
            let anchor = granularity.start_of(context.today)?;
            for interval in IntervalWalk::new(granularity, range_start, range_end)? {
                records.push(build_record(&context, position, granularity, anchor, interval?)?);
            }
            debug!(
                granularity = %granularity,
                records = records.len() - before,
                "Walked granularity"
            );
        }

        info!(
            records = records.len(),
            years = years.len(),
            start_year = years.start,
            "Generated period records"
        );
        Ok(records)
    }
}

fn build_record(
    context: &WalkContext<'_>,
    position: usize,
    granularity: Granularity,
    anchor: NaiveDate,
    interval: CalendarInterval,
) -> Result<PeriodRecord, PeriodError> {
    let relative = RelativePosition::between(granularity, anchor, interval.start, &context.locale)?;
    let label = label(granularity, interval.start, &context.locale);
    let name = if relative.is_near() {
        format!("{} ({})", label.name, relative.semantic)
    } else {
        label.name
    };

    let is_in = if context.order.len() > 1 {
        Some(containing_ids(&interval, context.order.coarser_than(position))?)
    } else {
        None
    };
    let part_of = context
        .order
        .next_after(position)
        .map(|parent| parent_id(&interval, parent, &context.timezone))
        .transpose()?;

    Ok(PeriodRecord {
        granularity,
        dates: PeriodDates::new(interval.start, interval.end_exclusive()?),
        relative: relative.offset,
        semantic: relative.semantic,
        number: label.number,
        name,
        dotw: label.dotw,
        is_in,
        part_of,
        id: interval.stable_id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::FixedClock;
    use serde_json::json;

    fn generator_at(y: i32, m: u32, d: u32) -> PeriodGenerator {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap());
        PeriodGenerator::new(Arc::new(LocaleCatalog::load().unwrap()), Arc::new(clock))
    }

    fn filter(from: i32, types: &[&str]) -> PeriodFilter {
        PeriodFilter {
            from: Some(json!(from)),
            num_years: Some(json!(1)),
            timezone: Some("UTC".to_string()),
            locale: Some("en".to_string()),
            types: Some(types.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_single_year_record() {
        let generator = generator_at(2020, 6, 1);
        let records = generator.generate(&filter(2024, &["Year"])).unwrap();

        assert_eq!(records.len(), 1);
        let year = &records[0];
        assert_eq!(year.granularity, Granularity::Year);
        assert_eq!(year.number, 2024);
        assert_eq!(year.name, "2024");
        assert_eq!(year.relative, 4);
        assert_eq!(year.semantic, "in 4 years");
        assert_eq!(year.is_in, None);
        assert_eq!(year.part_of, None);
        assert_eq!(
            year.dates,
            PeriodDates::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
            )
        );
    }

    #[test]
    fn test_near_periods_carry_semantic_suffix() {
        let generator = generator_at(2024, 3, 15);
        let records = generator.generate(&filter(2024, &["Month"])).unwrap();

        assert_eq!(records[1].name, "2024/02 Feb (last month)");
        assert_eq!(records[2].name, "2024/03 Mar (this month)");
        assert_eq!(records[3].name, "2024/04 Apr (next month)");
        assert_eq!(records[4].name, "2024/05 May");
    }

    #[test]
    fn test_coarsest_granularity_has_empty_is_in() {
        let generator = generator_at(2024, 3, 15);
        let records = generator.generate(&filter(2024, &["Quarter", "Year"])).unwrap();

        let year = records.iter().find(|r| r.granularity == Granularity::Year).unwrap();
        assert_eq!(year.is_in, Some(vec![]));
        assert_eq!(year.part_of, None);
    }

    #[test]
    fn test_empty_types_still_validate_zone() {
        let generator = generator_at(2024, 3, 15);
        assert!(generator.generate(&filter(2024, &[])).unwrap().is_empty());

        let mut bad = filter(2024, &[]);
        bad.timezone = Some("Atlantis/Capital".to_string());
        assert!(matches!(generator.generate(&bad), Err(PeriodError::Temporal(_))));
    }

    #[test]
    fn test_unknown_timezone_fails_whole_request() {
        let generator = generator_at(2024, 3, 15);
        let mut bad = filter(2024, &["Day"]);
        bad.timezone = Some("Atlantis/Capital".to_string());

        assert!(matches!(generator.generate(&bad), Err(PeriodError::Temporal(_))));
    }

    #[test]
    fn test_defaults_fill_missing_timezone_and_locale() {
        let generator = generator_at(2024, 3, 15);
        let records = generator
            .generate(&PeriodFilter {
                from: Some(json!(2024)),
                types: Some(vec!["Year".to_string()]),
                ..PeriodFilter::default()
            })
            .unwrap();

        assert_eq!(records[0].semantic, "this year");
    }
}
