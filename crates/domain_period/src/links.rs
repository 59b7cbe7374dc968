//! Links between granularities
//!
//! - `is_in`: every coarser requested period that contains the start or the
//!   last day of a period. A week spanning two months is in both.
//! - `part_of`: the next coarser requested period containing the period's
//!   midpoint, so a spanning week belongs to exactly one month.

use core_kernel::{CalendarInterval, Granularity, StableId, TemporalError, Timezone};

/// Ids of the coarser periods containing either end of `interval`
///
/// Coarsest granularity first; for each granularity the period containing
/// the start comes before the one containing the last day. Duplicates are
/// dropped, keeping the first occurrence.
pub fn containing_ids(
    interval: &CalendarInterval,
    coarser: &[Granularity],
) -> Result<Vec<StableId>, TemporalError> {
    let mut ids = Vec::with_capacity(coarser.len() * 2);
    for granularity in coarser.iter().rev() {
        for day in [interval.start, interval.last] {
            let id = granularity.interval_containing(day)?.stable_id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Id of the `parent` period containing the midpoint of `interval`
pub fn parent_id(
    interval: &CalendarInterval,
    parent: Granularity,
    timezone: &Timezone,
) -> Result<StableId, TemporalError> {
    let midpoint = timezone.midpoint(interval)?;
    Ok(parent.interval_containing(midpoint)?.stable_id())
}
