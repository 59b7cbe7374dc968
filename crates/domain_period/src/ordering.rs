//! Granularity ordering
//!
//! The resolved order drives both the walk order and the links between
//! granularities: a period is contained in (`is_in`) every later
//! granularity and composes (`part_of`) the immediately following one.

use core_kernel::Granularity;

use crate::error::PeriodError;

/// Ordered granularities of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityOrder(Vec<Granularity>);

impl GranularityOrder {
    /// The order used when the caller names no types
    pub fn canonical() -> Self {
        Self(Granularity::ALL.to_vec())
    }

    /// Resolves the caller's `types`
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::UnknownGranularity` for a name that is not one
    /// of the five granularities.
    pub fn resolve(types: Option<&[String]>) -> Result<Self, PeriodError> {
        match types {
            None => Ok(Self::canonical()),
            Some(names) => {
                let mut requested = Vec::with_capacity(names.len());
                for name in names {
                    let granularity: Granularity = name.parse()?;
                    if !requested.contains(&granularity) {
                        requested.push(granularity);
                    }
                }
                Ok(Self(custom_sort(requested)))
            }
        }
    }

    pub fn as_slice(&self) -> &[Granularity] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Granularity> + '_ {
        self.0.iter().copied()
    }

    /// Granularities after `position`, finest first
    pub fn coarser_than(&self, position: usize) -> &[Granularity] {
        self.0.get(position + 1..).unwrap_or_default()
    }

    /// The granularity right after `position`
    pub fn next_after(&self, position: usize) -> Option<Granularity> {
        self.0.get(position + 1).copied()
    }
}

/// Sorts by name length, then moves `Year` to the end
///
/// Name length stands in for coarseness. It ties `Week` with `Year`, which
/// is why `Year` is moved last afterwards. The sort is stable.
pub fn custom_sort(mut granularities: Vec<Granularity>) -> Vec<Granularity> {
    granularities.sort_by_key(|g| g.name().len());
    if let Some(index) = granularities.iter().position(|g| *g == Granularity::Year) {
        let year = granularities.remove(index);
        granularities.push(year);
    }
    granularities
}
