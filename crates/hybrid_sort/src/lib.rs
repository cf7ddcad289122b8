mod algorithms;
mod error;

use std::fmt;
use std::ops::Range;

use tracing::{debug, warn};

pub use algorithms::classic::classic_quick_sort;
pub use algorithms::pivot::MeanKey;
pub use error::{ScanSide, SortError};

/// Sub-ranges up to this length go through the fixed compare-and-swap network.
pub const MANUAL_SORT_MAX: usize = 3;
/// Default crossover between insertion sort and partitioning.
pub const INSERTION_SORT_MAX: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    ManualSort,
    InsertionSort,
    Partition,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::ManualSort => "manual_sort",
            Self::InsertionSort => "insertion_sort",
            Self::Partition => "partition",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotRule {
    /// Floor of the average of the two half-means, clamped to the sub-range's values.
    #[default]
    HalfMeans,
    /// Average of two sampled midranges around the middle.
    SampledMidrange,
    /// Median of first, middle and last element.
    MedianOf3,
}

pub const ALL_PIVOT_RULES: [PivotRule; 3] = [
    PivotRule::HalfMeans,
    PivotRule::SampledMidrange,
    PivotRule::MedianOf3,
];

impl PivotRule {
    pub fn name(self) -> &'static str {
        match self {
            Self::HalfMeans => "half_means",
            Self::SampledMidrange => "sampled_midrange",
            Self::MedianOf3 => "median_of_3",
        }
    }

    /// Whether the rule computes a synthetic value and so needs [`MeanKey`].
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Self::MedianOf3)
    }
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    pub insertion_threshold: usize,
    pub pivot_rule: PivotRule,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    insertion_threshold: INSERTION_SORT_MAX,
    pivot_rule: PivotRule::HalfMeans,
};

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl SortConfig {
    /// No insertion band: everything above three elements is partitioned.
    pub fn baseline() -> Self {
        Self {
            insertion_threshold: MANUAL_SORT_MAX,
            ..DEFAULT_CONFIG
        }
    }

    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    pub fn with_pivot_rule(mut self, rule: PivotRule) -> Self {
        self.pivot_rule = rule;
        self
    }
}

/// Counters collected over one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub manual_sorts: usize,
    pub insertion_sorts: usize,
    pub partitions: usize,
    pub three_way_fallbacks: usize,
    /// Deepest recursion level reached; the top-level call is depth 0.
    pub max_depth: usize,
}

pub fn strategy_for(len: usize, config: &SortConfig) -> Strategy {
    if len <= MANUAL_SORT_MAX {
        Strategy::ManualSort
    } else if len <= config.insertion_threshold {
        Strategy::InsertionSort
    } else {
        Strategy::Partition
    }
}

/// Resolves the inclusive `[low, high]` into a slice range, rejecting anything
/// that does not lie inside `0..len`. `low == high + 1` is the empty range.
fn resolve_range(len: usize, low: usize, high: usize) -> Result<Range<usize>, SortError> {
    match high.checked_add(1) {
        Some(end) if low <= end && end <= len => Ok(low..end),
        _ => Err(SortError::OutOfBoundsRange { low, high, len }),
    }
}

/// Sorts `data[low..=high]` in place with the default configuration.
pub fn sort<T: MeanKey>(data: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    sort_with(data, low, high, &DEFAULT_CONFIG).map(drop)
}

/// Sorts the whole slice, including the empty one.
pub fn sort_slice<T: MeanKey>(data: &mut [T]) {
    sort_to_completion(data, &DEFAULT_CONFIG, algorithms::pivot::half_means);
}

/// Runs the hybrid sort and, should a partition scan abort, finishes the
/// partly permuted slice with insertion sort. The slice always ends sorted.
fn sort_to_completion<T, F>(data: &mut [T], config: &SortConfig, pick_pivot: F)
where
    T: Ord,
    F: Fn(&[T]) -> T,
{
    if let Err(err) = algorithms::hybrid::hybrid_sort(data, config, pick_pivot) {
        warn!(%err, len = data.len(), "hybrid sort aborted, finishing with insertion sort");
        algorithms::insertion_sort::insertion_sort(data);
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(len = data.len(), low = low, high = high, rule = %config.pivot_rule)
)]
pub fn sort_with<T: MeanKey>(
    data: &mut [T],
    low: usize,
    high: usize,
    config: &SortConfig,
) -> Result<SortStats, SortError> {
    let range = resolve_range(data.len(), low, high)
        .inspect_err(|err| debug!(%err, "rejected sort range"))?;
    let data = &mut data[range];
    let stats = match config.pivot_rule {
        PivotRule::HalfMeans => {
            algorithms::hybrid::hybrid_sort(data, config, algorithms::pivot::half_means)
        }
        PivotRule::SampledMidrange => {
            algorithms::hybrid::hybrid_sort(data, config, algorithms::pivot::sampled_midrange)
        }
        PivotRule::MedianOf3 => {
            algorithms::hybrid::hybrid_sort(data, config, algorithms::pivot::median_of_3)
        }
    }?;
    debug!(?stats, "sort finished");
    Ok(stats)
}

/// Sorts `data[low..=high]` for any totally ordered element type, using the
/// median-of-three pivot in place of the arithmetic ones.
pub fn sort_ord<T: Ord + Clone>(data: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    sort_ord_with(
        data,
        low,
        high,
        &DEFAULT_CONFIG.with_pivot_rule(PivotRule::MedianOf3),
    )
    .map(drop)
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(len = data.len(), low = low, high = high, rule = %config.pivot_rule)
)]
pub fn sort_ord_with<T: Ord + Clone>(
    data: &mut [T],
    low: usize,
    high: usize,
    config: &SortConfig,
) -> Result<SortStats, SortError> {
    if config.pivot_rule.is_arithmetic() {
        debug!("arithmetic pivot requested for ordered-only elements");
        return Err(SortError::UnsupportedPivot(config.pivot_rule));
    }
    let range = resolve_range(data.len(), low, high)
        .inspect_err(|err| debug!(%err, "rejected sort range"))?;
    let stats =
        algorithms::hybrid::hybrid_sort(&mut data[range], config, algorithms::pivot::median_of_3)?;
    debug!(?stats, "sort finished");
    Ok(stats)
}
