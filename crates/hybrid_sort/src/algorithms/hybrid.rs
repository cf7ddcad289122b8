use tracing::trace;

use crate::{SortConfig, SortError, SortStats, Strategy, strategy_for};

use super::insertion_sort::insertion_sort;
use super::manual_sort::manual_sort;
use super::partition;

pub fn hybrid_sort<T, F>(
    data: &mut [T],
    config: &SortConfig,
    pick_pivot: F,
) -> Result<SortStats, SortError>
where
    T: Ord,
    F: Fn(&[T]) -> T,
{
    let mut stats = SortStats::default();
    hybrid_recursive(data, 0, config, &pick_pivot, &mut stats)?;
    Ok(stats)
}

fn hybrid_recursive<T, F>(
    mut data: &mut [T],
    depth: usize,
    config: &SortConfig,
    pick_pivot: &F,
    stats: &mut SortStats,
) -> Result<(), SortError>
where
    T: Ord,
    F: Fn(&[T]) -> T,
{
    stats.max_depth = stats.max_depth.max(depth);

    loop {
        let len = data.len();
        match strategy_for(len, config) {
            Strategy::ManualSort => {
                stats.manual_sorts += 1;
                manual_sort(data);
                return Ok(());
            }
            Strategy::InsertionSort => {
                stats.insertion_sorts += 1;
                insertion_sort(data);
                return Ok(());
            }
            Strategy::Partition => {}
        }

        stats.partitions += 1;
        let pivot = pick_pivot(data);
        let split = partition::partition_hoare(data, &pivot)? + 1;

        let (left, right) = if split == len {
            // Only a unique maximum equal to the pivot at the end gets here.
            stats.three_way_fallbacks += 1;
            let (lt, gt) = partition::partition_3way(data, &pivot);
            trace!(len, lt, gt, "hoare split made no progress, falling back to three-way");
            if lt == 0 && gt == len {
                return Ok(());
            }
            let (left, rest) = data.split_at_mut(lt);
            let (_, right) = rest.split_at_mut(gt - lt);
            (left, right)
        } else {
            data.split_at_mut(split)
        };

        if left.len() < right.len() {
            hybrid_recursive(left, depth + 1, config, pick_pivot, stats)?;
            data = right;
        } else {
            hybrid_recursive(right, depth + 1, config, pick_pivot, stats)?;
            data = left;
        }
    }
}
