/// Lomuto partition around the last element; returns the pivot's final index.
#[inline]
fn partition_lomuto<T: Ord>(data: &mut [T]) -> usize {
    debug_assert!(!data.is_empty());
    let last = data.len() - 1;
    let mut store = 0usize;
    for j in 0..last {
        if data[j] < data[last] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}

/// Textbook quicksort: last-element pivot, Lomuto partition, no small-size
/// cutoff. Quadratic on sorted, reversed and all-equal input; stack depth stays
/// logarithmic because only the smaller side is recursed.
pub fn classic_quick_sort<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let p = partition_lomuto(data);
        let (left, rest) = data.split_at_mut(p);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            classic_quick_sort(left);
            data = right;
        } else {
            classic_quick_sort(right);
            data = left;
        }
    }
}
