//! Position of a period relative to now

use chrono::NaiveDate;
use core_kernel::{CoreError, Granularity, ResolvedLocale};

/// Offset from the current period, in units of the period's own granularity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePosition {
    /// 0 for the period containing now, negative for the past
    pub offset: i64,
    /// Calendar phrase such as "last week" or "in 3 months"
    pub semantic: String,
}

impl RelativePosition {
    /// Position of the period starting on `start`, where `anchor` is the
    /// start of the period containing now
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Resource` if the locale cannot phrase the offset.
    pub fn between(
        granularity: Granularity,
        anchor: NaiveDate,
        start: NaiveDate,
        locale: &ResolvedLocale<'_>,
    ) -> Result<Self, CoreError> {
        let offset = granularity.units_between(anchor, start);
        Ok(Self {
            offset,
            semantic: locale.relative(granularity, offset)?,
        })
    }

    /// True for the current, previous and next period
    pub fn is_near(&self) -> bool {
        self.offset.abs() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::LocaleCatalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offsets_and_phrases() {
        let catalog = LocaleCatalog::load().unwrap();
        let en = catalog.resolve("en").unwrap();
        let anchor = date(2024, 4, 1);

        let current = RelativePosition::between(Granularity::Quarter, anchor, anchor, &en).unwrap();
        assert_eq!(current.offset, 0);
        assert_eq!(current.semantic, "this quarter");
        assert!(current.is_near());

        let past = RelativePosition::between(Granularity::Quarter, anchor, date(2023, 7, 1), &en).unwrap();
        assert_eq!(past.offset, -3);
        assert_eq!(past.semantic, "3 quarters ago");
        assert!(!past.is_near());

        let next = RelativePosition::between(Granularity::Month, anchor, date(2024, 5, 1), &en).unwrap();
        assert_eq!(next.offset, 1);
        assert_eq!(next.semantic, "next month");
    }
}
