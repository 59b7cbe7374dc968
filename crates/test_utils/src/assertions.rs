//! Custom Test Assertions
//!
//! Provides assertion helpers for period records that give more
//! meaningful failure messages than standard assertions.

use std::collections::HashSet;

use chrono::NaiveDate;
use core_kernel::Granularity;
use domain_period::PeriodRecord;

/// Returns the records of one granularity, in output order
pub fn records_of(records: &[PeriodRecord], granularity: Granularity) -> Vec<&PeriodRecord> {
    records.iter().filter(|r| r.granularity == granularity).collect()
}

/// Asserts that the records of each granularity are consecutive
///
/// # Panics
///
/// Panics if a period does not start where the previous one ended
pub fn assert_contiguous(records: &[PeriodRecord]) {
    for granularity in Granularity::ALL {
        let group = records_of(records, granularity);
        for pair in group.windows(2) {
            assert_eq!(
                pair[0].dates.end, pair[1].dates.start,
                "{} periods are not contiguous: {} is followed by {}",
                granularity, pair[0].name, pair[1].name
            );
        }
    }
}

/// Asserts that the periods of `granularity` cover `[first, last]`
pub fn assert_covers_range(
    records: &[PeriodRecord],
    granularity: Granularity,
    first: NaiveDate,
    last: NaiveDate,
) {
    let group = records_of(records, granularity);
    let (Some(head), Some(tail)) = (group.first(), group.last()) else {
        panic!("No {} periods were generated", granularity);
    };
    assert!(
        head.dates.start <= first,
        "{} periods start at {}, after {}",
        granularity,
        head.dates.start,
        first
    );
    assert!(
        tail.dates.end > last,
        "{} periods end at {}, before {}",
        granularity,
        tail.dates.end,
        last
    );
}

/// Asserts that no two records share an id
pub fn assert_ids_unique(records: &[PeriodRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        assert!(
            seen.insert(record.id),
            "Duplicate id {} for {} {}",
            record.id,
            record.granularity,
            record.name
        );
    }
}

/// Asserts that records are grouped by granularity in `order`
pub fn assert_grouped_in_order(records: &[PeriodRecord], order: &[Granularity]) {
    let mut groups: Vec<Granularity> = Vec::new();
    for record in records {
        if groups.last() != Some(&record.granularity) {
            groups.push(record.granularity);
        }
    }
    assert_eq!(groups, order, "Records are not grouped in the expected order");
}
